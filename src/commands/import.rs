//! Bulk import and schema creation commands

use super::{open_database, write_outcome};
use crate::{storage::Outcome, Result};
use std::io::Write;
use std::path::Path;

/// Handle the import command
pub fn handle_import<W: Write>(out: &mut W, db_path: &Path, dir: &Path) -> Result<bool> {
    let mut db = open_database(db_path)?;
    tracing::info!(dir = %dir.display(), "importing csv directory");
    write_outcome(out, "import", db.import_csv_dir(dir))
}

/// Handle the createTables command
pub fn handle_create_tables<W: Write>(out: &mut W, db_path: &Path) -> Result<bool> {
    let mut db = open_database(db_path)?;
    let result = db.initialize_schema().map(|_| Outcome::Applied);
    write_outcome(out, "createTables", result)
}
