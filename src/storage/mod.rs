//! Persistence context for the roster store
//!
//! This module provides the gateway between entities and the SQLite store:
//! - `schema`: connection management and schema inspection
//! - `teams` / `players`: the two typed collections
//! - `unit_of_work`: transactional scope exposing the same collections

pub mod players;
pub mod schema;
pub mod teams;
pub mod unit_of_work;


pub use players::Players;
pub use schema::{RosterDb, SchemaObject};
pub use teams::Teams;
pub use unit_of_work::UnitOfWork;

use crate::error::RosterError;
use tracing::warn;

/// What an upsert did with the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Inserted,
    Updated,
}

/// Classify a failed write, logging constraint rejections.
pub(crate) fn write_failed(entity: &'static str, op: &str, err: rusqlite::Error) -> RosterError {
    let err = RosterError::from(err);
    if let RosterError::Constraint { message } = &err {
        warn!(entity, op, %message, "store rejected write");
    }
    err
}
