//! Schema migrations and seed data
//!
//! - `Migration`: one reversible schema step, identified by a timestamped id
//! - `Migrator`: applies and reverts migrations, recording them in
//!   `__MigrationHistory`
//! - `seed`: idempotent baseline rows, run after migrating to the latest version
//!
//! The schema has two states. It starts `Absent`; `up` moves it to
//! `Present` and `down` moves it back.

pub mod m201711011918004_initial_create;
pub mod seed;

#[cfg(test)]
mod tests;

pub use m201711011918004_initial_create::InitialCreate;
pub use seed::{seed, SeedData, SeedPlayer, SeedReport};

use crate::error::{Result, RosterError};
use crate::storage::{schema::HISTORY_TABLE, RosterDb};
use chrono::Local;
use rusqlite::{params, Connection};
use tracing::{debug, info};

/// A reversible schema step
pub trait Migration {
    /// Unique, sortable identifier
    fn id(&self) -> &'static str;

    fn up(&self, conn: &Connection) -> Result<()>;

    /// Exact inverse of `up`
    fn down(&self, conn: &Connection) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaState {
    Absent,
    Present,
}

/// Every migration this crate knows about, oldest first
pub fn all_migrations() -> Vec<Box<dyn Migration>> {
    vec![Box::new(InitialCreate) as Box<dyn Migration>]
}

/// Applies and reverts migrations against one database
pub struct Migrator<'db> {
    db: &'db mut RosterDb,
    migrations: Vec<Box<dyn Migration>>,
}

impl<'db> Migrator<'db> {
    pub fn new(db: &'db mut RosterDb) -> Result<Self> {
        Self::with_migrations(db, all_migrations())
    }

    /// Migrator over an explicit migration list, oldest first
    pub fn with_migrations(
        db: &'db mut RosterDb,
        migrations: Vec<Box<dyn Migration>>,
    ) -> Result<Self> {
        db.conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS \"{}\" (
                    MigrationId TEXT PRIMARY KEY,
                    AppliedAt DATETIME NOT NULL
                )",
                HISTORY_TABLE
            ),
            [],
        )?;
        Ok(Self { db, migrations })
    }

    /// Applied migration ids, oldest first
    pub fn applied(&self) -> Result<Vec<String>> {
        let mut stmt = self.db.conn.prepare(&format!(
            "SELECT MigrationId FROM \"{}\" ORDER BY MigrationId",
            HISTORY_TABLE
        ))?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut applied = Vec::new();
        for row in rows {
            applied.push(row?);
        }
        Ok(applied)
    }

    /// Known migrations not yet applied, oldest first
    pub fn pending(&self) -> Result<Vec<&'static str>> {
        let applied = self.applied()?;
        Ok(self
            .migrations
            .iter()
            .map(|m| m.id())
            .filter(|id| !applied.iter().any(|a| a.as_str() == *id))
            .collect())
    }

    pub fn state(&self) -> Result<SchemaState> {
        if self.applied()?.is_empty() {
            Ok(SchemaState::Absent)
        } else {
            Ok(SchemaState::Present)
        }
    }

    /// Apply every pending migration in order.
    ///
    /// Each migration runs in its own transaction together with its history
    /// row, so a failure leaves the schema as it was before that migration.
    pub fn up(&mut self) -> Result<Vec<&'static str>> {
        let pending = self.pending()?;
        let mut applied = Vec::new();

        for migration in &self.migrations {
            let id = migration.id();
            if !pending.contains(&id) {
                continue;
            }

            let tx = self.db.conn.transaction()?;
            migration.up(&tx).map_err(|e| migration_failed(id, e))?;
            tx.execute(
                &format!(
                    "INSERT INTO \"{}\" (MigrationId, AppliedAt) VALUES (?, ?)",
                    HISTORY_TABLE
                ),
                params![id, Local::now().naive_local()],
            )
            .map_err(|e| migration_failed(id, e.into()))?;
            tx.commit()?;

            info!(migration = id, "applied migration");
            applied.push(id);
        }

        if applied.is_empty() {
            debug!("schema already up to date");
        }
        Ok(applied)
    }

    /// Revert the most recently applied migration, if any
    pub fn down(&mut self) -> Result<Option<&'static str>> {
        let applied = self.applied()?;
        let Some(last) = applied.last() else {
            debug!("no migrations to revert");
            return Ok(None);
        };

        let migration = self
            .migrations
            .iter()
            .find(|m| m.id() == last.as_str())
            .ok_or_else(|| RosterError::Migration {
                migration: last.clone(),
                message: "applied migration is not known to this build".to_string(),
            })?;
        let id = migration.id();

        let tx = self.db.conn.transaction()?;
        migration.down(&tx).map_err(|e| migration_failed(id, e))?;
        tx.execute(
            &format!("DELETE FROM \"{}\" WHERE MigrationId = ?", HISTORY_TABLE),
            params![id],
        )
        .map_err(|e| migration_failed(id, e.into()))?;
        tx.commit()?;

        info!(migration = id, "reverted migration");
        Ok(Some(id))
    }

    /// Revert every applied migration, newest first
    pub fn reset(&mut self) -> Result<Vec<&'static str>> {
        let mut reverted = Vec::new();
        while let Some(id) = self.down()? {
            reverted.push(id);
        }
        Ok(reverted)
    }
}

fn migration_failed(id: &str, err: RosterError) -> RosterError {
    RosterError::Migration {
        migration: id.to_string(),
        message: err.to_string(),
    }
}

/// Result of bringing a database up to date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub applied: Vec<&'static str>,
    pub seeded: Option<SeedReport>,
}

/// Apply pending migrations, then run the seed when one is given.
///
/// The seed runs even when no migration was pending.
pub fn update_database(db: &mut RosterDb, data: Option<&SeedData>) -> Result<UpdateReport> {
    let applied = Migrator::new(db)?.up()?;
    let seeded = match data {
        Some(data) => Some(seed(db, data)?),
        None => None,
    };
    Ok(UpdateReport { applied, seeded })
}
