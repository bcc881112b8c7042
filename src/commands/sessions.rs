//! Viewing session commands

use super::{open_database, write_outcome};
use crate::{storage::Session, Result};
use std::io::Write;
use std::path::Path;

/// Handle the insertSession command
pub fn handle_insert_session<W: Write>(
    out: &mut W,
    db_path: &Path,
    session: &Session,
) -> Result<bool> {
    let mut db = open_database(db_path)?;
    tracing::debug!(?session, "recording session");
    write_outcome(out, "insertSession", db.insert_session(session))
}
