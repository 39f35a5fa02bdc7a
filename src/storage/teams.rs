//! The `Team` collection

use super::{write_failed, Players, Upserted};
use crate::error::{Result, RosterError};
use crate::models::{Entity, Roster, Team, TeamId};
use crate::validation::Validate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

/// Typed access to the `Team` table, ordered by `Team_Id`
pub struct Teams<'c> {
    conn: &'c Connection,
}

impl<'c> Teams<'c> {
    pub(crate) fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Insert a team and return it with its identifier.
    ///
    /// An identifier already set on `team` is used as-is; otherwise the
    /// store assigns the next one.
    pub fn insert(&self, team: &Team) -> Result<Team> {
        team.validate()?;

        let result = match team.team_id {
            Some(id) => self.conn.execute(
                &format!(
                    "INSERT INTO \"{}\" (Team_Id, TeamName) VALUES (?, ?)",
                    Team::TABLE
                ),
                params![id.as_i64(), team.team_name],
            ),
            None => self.conn.execute(
                &format!("INSERT INTO \"{}\" (TeamName) VALUES (?)", Team::TABLE),
                params![team.team_name],
            ),
        };
        result.map_err(|e| write_failed(Team::NAME, "insert", e))?;

        let team_id = team
            .team_id
            .unwrap_or_else(|| TeamId::new(self.conn.last_insert_rowid()));
        debug!(%team_id, name = %team.team_name, "inserted team");

        Ok(Team {
            team_id: Some(team_id),
            team_name: team.team_name.clone(),
        })
    }

    pub fn find(&self, team_id: TeamId) -> Result<Option<Team>> {
        let result = self.conn.query_row(
            &format!(
                "SELECT Team_Id, TeamName FROM \"{}\" WHERE Team_Id = ?",
                Team::TABLE
            ),
            params![team_id.as_i64()],
            row_to_team,
        );

        match result {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// First team with exactly this name
    pub fn find_by_name(&self, team_name: &str) -> Result<Option<Team>> {
        let result = self.conn.query_row(
            &format!(
                "SELECT Team_Id, TeamName FROM \"{}\" WHERE TeamName = ?
                 ORDER BY Team_Id LIMIT 1",
                Team::TABLE
            ),
            params![team_name],
            row_to_team,
        );

        match result {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list(&self) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT Team_Id, TeamName FROM \"{}\" ORDER BY Team_Id",
            Team::TABLE
        ))?;

        let rows = stmt.query_map([], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", Team::TABLE),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Overwrite the stored row with the team's fields
    pub fn update(&self, team: &Team) -> Result<()> {
        team.validate()?;
        let team_id = team
            .team_id
            .ok_or(RosterError::MissingId { entity: Team::NAME })?;

        let rows_affected = self
            .conn
            .execute(
                &format!(
                    "UPDATE \"{}\" SET TeamName = ? WHERE Team_Id = ?",
                    Team::TABLE
                ),
                params![team.team_name, team_id.as_i64()],
            )
            .map_err(|e| write_failed(Team::NAME, "update", e))?;

        if rows_affected == 0 {
            return Err(RosterError::NotFound {
                entity: Team::NAME,
                id: team_id.as_i64(),
            });
        }
        debug!(%team_id, name = %team.team_name, "updated team");
        Ok(())
    }

    /// Remove a team. Fails with a constraint error while players still
    /// reference it; returns `false` when no such team exists.
    pub fn delete(&self, team_id: TeamId) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute(
                &format!("DELETE FROM \"{}\" WHERE Team_Id = ?", Team::TABLE),
                params![team_id.as_i64()],
            )
            .map_err(|e| write_failed(Team::NAME, "delete", e))?;

        if rows_affected > 0 {
            debug!(%team_id, "deleted team");
        }
        Ok(rows_affected > 0)
    }

    /// Update the row with the team's identifier if it exists, insert it otherwise
    pub fn upsert(&self, team: &Team) -> Result<Upserted> {
        match team.team_id {
            Some(team_id) if self.find(team_id)?.is_some() => {
                self.update(team)?;
                Ok(Upserted::Updated)
            }
            _ => {
                self.insert(team)?;
                Ok(Upserted::Inserted)
            }
        }
    }

    /// The team together with every player that references it
    pub fn roster(&self, team_id: TeamId) -> Result<Option<Roster>> {
        let Some(team) = self.find(team_id)? else {
            return Ok(None);
        };
        let players = Players::new(self.conn).for_team(team_id)?;
        Ok(Some(Roster { team, players }))
    }
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        team_id: Some(TeamId::new(row.get(0)?)),
        team_name: row.get(1)?,
    })
}
