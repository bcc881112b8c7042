//! Bulk CSV import
//!
//! Replaces the whole catalog with the contents of a directory of CSV
//! files, one per table. Dropping, recreating and loading share one
//! transaction, so a bad file leaves the previous data in place.

use super::{
    models::{Outcome, Rejection},
    schema::{create_tables, drop_tables, StreamingDatabase, Table},
};
use crate::cli::types::GenreList;
use anyhow::{Context, Result};
use rusqlite::{params_from_iter, Transaction};
use std::path::Path;

/// Position of `genres` in a `Users` row
const USERS_GENRES_COLUMN: usize = 8;

impl StreamingDatabase {
    /// Drop every table, recreate the schema and load `<dir>/<table>.csv` files
    pub fn import_csv_dir(&mut self, dir: &Path) -> Result<Outcome> {
        if !dir.is_dir() {
            let rejection = Rejection::MissingImportDir(dir.to_path_buf());
            tracing::warn!(reason = %rejection, "rejected import");
            return Ok(Outcome::Rejected(rejection));
        }

        let tx = self.conn.transaction()?;
        drop_tables(&tx)?;
        create_tables(&tx)?;

        for table in Table::ALL {
            let path = dir.join(table.csv_file());
            if !path.is_file() {
                tracing::debug!(%table, path = %path.display(), "no csv file, skipping");
                continue;
            }

            let loaded = load_table(&tx, table, &path)
                .with_context(|| format!("loading {} from {}", table, path.display()))?;
            tracing::info!(%table, rows = loaded, "imported");
        }

        tx.commit()?;
        Ok(Outcome::Applied)
    }
}

/// Insert every data row of one CSV file positionally into `table`.
///
/// The header row is skipped and empty cells become `NULL`. Favorite genres
/// are normalized on the way in, the same as for `insertViewer`.
fn load_table(tx: &Transaction<'_>, table: Table, path: &Path) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut loaded = 0;
    for result in reader.records() {
        let record = result?;
        if record.is_empty() {
            continue;
        }

        let placeholders = vec!["?"; record.len()].join(", ");
        let sql = format!("INSERT INTO {} VALUES ({})", table.name(), placeholders);
        let mut stmt = tx.prepare_cached(&sql)?;

        let values = record.iter().enumerate().map(|(column, cell)| {
            if table == Table::Users && column == USERS_GENRES_COLUMN {
                GenreList::from_stored(Some(cell)).to_stored()
            } else if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            }
        });
        stmt.execute(params_from_iter(values))?;
        loaded += 1;
    }

    Ok(loaded)
}
