//! Command implementations for the team-roster CLI

pub mod migrate;
pub mod player;
pub mod team;

use crate::{config::resolve_db_path, storage::RosterDb, Result};
use std::path::PathBuf;

/// Open the database named by `--db`, `TEAM_ROSTER_DB` or the default location
pub fn open_db(db: Option<PathBuf>) -> Result<RosterDb> {
    let path = resolve_db_path(db)?;
    RosterDb::open(&path)
}
