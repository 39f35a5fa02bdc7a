//! Database connection and schema inspection

use super::{Players, Teams, UnitOfWork};
use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Table used by the migrator to record applied migrations
pub const HISTORY_TABLE: &str = "__MigrationHistory";

/// Connection owner for the roster store.
///
/// Foreign keys are enforced on every connection it opens. The connection
/// is closed when the value is dropped.
pub struct RosterDb {
    pub(crate) conn: Connection,
}

/// A table or index as recorded in `sqlite_master`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaObject {
    pub kind: String,
    pub name: String,
    pub table: String,
    pub sql: Option<String>,
}

impl RosterDb {
    /// Open (or create) a database file
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening roster database");
        Self::from_connection(Connection::open(path)?)
    }

    /// Private in-memory database, mostly for tests
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// The `Team` collection
    pub fn teams(&self) -> Teams<'_> {
        Teams::new(&self.conn)
    }

    /// The `Player` collection
    pub fn players(&self) -> Players<'_> {
        Players::new(&self.conn)
    }

    /// Start a unit of work. Nothing is kept unless it is committed.
    pub fn begin(&mut self) -> Result<UnitOfWork<'_>> {
        Ok(UnitOfWork::new(self.conn.transaction()?))
    }

    /// Run `work` in one transaction: committed on `Ok`, rolled back otherwise.
    pub fn unit_of_work<T, F>(&mut self, work: F) -> Result<T>
    where
        F: FnOnce(&UnitOfWork<'_>) -> Result<T>,
    {
        let uow = self.begin()?;
        let value = work(&uow)?;
        uow.commit()?;
        Ok(value)
    }

    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            [table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Application tables and indexes, excluding SQLite internals and the
    /// migration history.
    pub fn schema_objects(&self) -> Result<Vec<SchemaObject>> {
        let mut stmt = self.conn.prepare(
            "SELECT type, name, tbl_name, sql
             FROM sqlite_master
             WHERE name NOT LIKE 'sqlite_%' AND tbl_name <> ?
             ORDER BY type, name",
        )?;

        let rows = stmt.query_map([HISTORY_TABLE], |row| {
            Ok(SchemaObject {
                kind: row.get(0)?,
                name: row.get(1)?,
                table: row.get(2)?,
                sql: row.get(3)?,
            })
        })?;

        let mut objects = Vec::new();
        for row in rows {
            objects.push(row?);
        }
        Ok(objects)
    }
}
