//! Team Roster Library
//!
//! Teams and the players assigned to them, persisted in SQLite with
//! versioned migrations and idempotent seed data.
//!
//! ## Features
//!
//! - **Entities**: `Team` and `Player` with typed identifiers
//! - **Validation**: per-field rules checked before every write
//! - **Persistence Context**: `teams()` / `players()` collections and
//!   transactional units of work
//! - **Migrations**: reversible schema steps with a recorded history
//! - **Seed**: baseline teams and players, upserted by identifier
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use team_roster::{migration::{update_database, SeedData}, storage::RosterDb, TeamId};
//!
//! # fn example() -> team_roster::Result<()> {
//! let mut db = RosterDb::open_in_memory()?;
//! update_database(&mut db, Some(&SeedData::baseline()))?;
//!
//! let roster = db.teams().roster(TeamId::new(1))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--db` every time:
//! ```bash
//! export TEAM_ROSTER_DB=/var/lib/team-roster/roster.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod migration;
pub mod models;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use error::{FieldError, Result, RosterError};
pub use models::{Player, PlayerId, Roster, Team, TeamId};

pub const DB_PATH_ENV_VAR: &str = "TEAM_ROSTER_DB";
