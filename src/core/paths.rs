//! Database location resolution

use crate::{error::StreamError, Result, DATABASE_ENV_VAR};
use std::path::PathBuf;

/// Path: <data dir>/streamdb/streaming.db
pub fn default_database_path() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| StreamError::MissingDataDir {
        env_var: DATABASE_ENV_VAR.to_string(),
    })?;
    Ok(base.join("streamdb").join("streaming.db"))
}

/// Resolve the database path from the `--db` flag, then the environment,
/// then the per-user data directory
pub fn resolve_database_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }

    match std::env::var_os(DATABASE_ENV_VAR) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => default_database_path(),
    }
}
