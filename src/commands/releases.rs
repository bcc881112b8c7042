//! Release and movie commands

use super::{open_database, write_outcome};
use crate::{cli::types::ReleaseId, Result};
use std::io::Write;
use std::path::Path;

/// Handle the insertMovie command
pub fn handle_insert_movie<W: Write>(
    out: &mut W,
    db_path: &Path,
    rid: ReleaseId,
    website_url: &str,
) -> Result<bool> {
    let mut db = open_database(db_path)?;
    write_outcome(out, "insertMovie", db.insert_movie(rid, website_url))
}

/// Handle the updateRelease command
pub fn handle_update_release<W: Write>(
    out: &mut W,
    db_path: &Path,
    rid: ReleaseId,
    title: &str,
) -> Result<bool> {
    let mut db = open_database(db_path)?;
    write_outcome(out, "updateRelease", db.update_release(rid, title))
}
