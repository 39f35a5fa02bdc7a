//! Database location resolution

use crate::error::{Result, RosterError};
use crate::DB_PATH_ENV_VAR;
use std::path::PathBuf;

/// Resolve the database file: explicit path, then `TEAM_ROSTER_DB`, then
/// `<data dir>/team-roster/roster.db`.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => return Ok(PathBuf::from(value)),
        _ => {}
    }

    default_db_path()
}

/// Path of the database under the platform data directory
pub fn default_db_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| RosterError::Config {
        message: "Could not determine data directory".to_string(),
    })?;
    Ok(data_dir.join("team-roster").join("roster.db"))
}
