//! Command implementations for the streaming catalog CLI
//!
//! Each handler opens its own connection, runs one storage operation and
//! writes its result to `out`: `Success`/`Fail` for writes, rows for reports.

pub mod import;
pub mod releases;
pub mod reports;
pub mod sessions;
pub mod viewers;

#[cfg(test)]
mod tests;

use crate::{
    cli::Commands,
    storage::{Outcome, ReportRow, Session, StreamingDatabase},
    Result,
};
use std::io::Write;
use std::path::Path;

/// Dispatch one parsed command against the database at `db_path`.
///
/// A write that prints `Fail` still returns `Ok`; an error here means the
/// database could not be opened or a report query failed.
pub fn run<W: Write>(out: &mut W, db_path: &Path, command: Commands) -> Result<()> {
    match command {
        Commands::Import { dir } => {
            import::handle_import(out, db_path, &dir)?;
        }

        Commands::CreateTables => {
            import::handle_create_tables(out, db_path)?;
        }

        Commands::InsertViewer {
            uid,
            email,
            nickname,
            street,
            city,
            state,
            zip,
            genres,
            joined_date,
            first,
            last,
            subscription,
        } => {
            viewers::handle_insert_viewer(
                out,
                db_path,
                viewers::InsertViewerParams {
                    uid,
                    email,
                    nickname,
                    street,
                    city,
                    state,
                    zip,
                    genres,
                    joined_date,
                    first,
                    last,
                    subscription,
                },
            )?;
        }

        Commands::InsertMovie { rid, website_url } => {
            releases::handle_insert_movie(out, db_path, rid, &website_url)?;
        }

        Commands::UpdateRelease { rid, title } => {
            releases::handle_update_release(out, db_path, rid, &title)?;
        }

        Commands::AddGenre { uid, genre } => {
            viewers::handle_add_genre(out, db_path, uid, &genre)?;
        }

        Commands::DeleteViewer { uid } => {
            viewers::handle_delete_viewer(out, db_path, uid)?;
        }

        Commands::InsertSession {
            sid,
            uid,
            rid,
            ep_num,
            initiate_at,
            leave_at,
            quality,
            device,
        } => {
            let session = Session {
                sid,
                uid,
                rid,
                ep_num,
                initiate_at,
                leave_at,
                quality,
                device,
            };
            sessions::handle_insert_session(out, db_path, &session)?;
        }

        Commands::ListReleases { uid, json } => {
            reports::handle_list_releases(out, db_path, uid, json)?
        }

        Commands::PopularRelease { k, json } => {
            reports::handle_popular_release(out, db_path, k, json)?
        }

        Commands::ReleaseTitle { sid, json } => {
            reports::handle_release_title(out, db_path, sid, json)?
        }

        Commands::ActiveViewer {
            n,
            start,
            end,
            json,
        } => reports::handle_active_viewer(out, db_path, n, start, end, json)?,

        Commands::VideosViewed { rid, json } => {
            reports::handle_videos_viewed(out, db_path, rid, json)?
        }
    }

    Ok(())
}

/// Open the database for one operation
pub fn open_database(db_path: &Path) -> Result<StreamingDatabase> {
    Ok(StreamingDatabase::open(db_path)?)
}

/// Print `Success` or `Fail` for a write and return whether it was applied.
///
/// Statement errors were already rolled back by the storage layer; they are
/// logged here and reported as `Fail` like any rejected pre-check.
pub fn write_outcome<W: Write>(
    out: &mut W,
    operation: &str,
    result: anyhow::Result<Outcome>,
) -> Result<bool> {
    let applied = match result {
        Ok(Outcome::Applied) => true,
        Ok(Outcome::Rejected(_)) => false,
        Err(err) => {
            let message = format!("{:#}", err);
            tracing::error!(operation, error = %message, "operation failed, rolled back");
            false
        }
    };

    writeln!(out, "{}", if applied { "Success" } else { "Fail" })?;
    Ok(applied)
}

/// Print report rows as comma-separated lines, or `empty_line` when there
/// are none. With `as_json` the rows are printed as a JSON array instead.
pub fn write_report<W: Write, R: ReportRow>(
    out: &mut W,
    rows: &[R],
    empty_line: &str,
    as_json: bool,
) -> Result<()> {
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(rows)?)?;
        return Ok(());
    }

    if rows.is_empty() {
        writeln!(out, "{}", empty_line)?;
    }
    for row in rows {
        writeln!(out, "{}", row.to_line())?;
    }
    Ok(())
}

/// Treat an empty positional argument as a missing value
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
