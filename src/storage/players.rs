//! The `Player` collection

use super::{write_failed, Teams, Upserted};
use crate::error::{Result, RosterError};
use crate::models::{Entity, Player, PlayerId, Team, TeamId};
use crate::validation::Validate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

const COLUMNS: &str = "Player_Id, FirstName, LastName, DateAdded, PlayerTeam_Team_Id";

/// Typed access to the `Player` table, ordered by `Player_Id`
pub struct Players<'c> {
    conn: &'c Connection,
}

impl<'c> Players<'c> {
    pub(crate) fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Insert a player and return it with its identifier.
    ///
    /// A team reference must point at an existing team.
    pub fn insert(&self, player: &Player) -> Result<Player> {
        player.validate()?;

        let team_id = player.team_id.map(|id| id.as_i64());
        let result = match player.player_id {
            Some(id) => self.conn.execute(
                &format!(
                    "INSERT INTO \"{}\" ({}) VALUES (?, ?, ?, ?, ?)",
                    Player::TABLE,
                    COLUMNS
                ),
                params![
                    id.as_i64(),
                    player.first_name,
                    player.last_name,
                    player.date_added,
                    team_id
                ],
            ),
            None => self.conn.execute(
                &format!(
                    "INSERT INTO \"{}\" (FirstName, LastName, DateAdded, PlayerTeam_Team_Id)
                     VALUES (?, ?, ?, ?)",
                    Player::TABLE
                ),
                params![
                    player.first_name,
                    player.last_name,
                    player.date_added,
                    team_id
                ],
            ),
        };
        result.map_err(|e| write_failed(Player::NAME, "insert", e))?;

        let player_id = player
            .player_id
            .unwrap_or_else(|| PlayerId::new(self.conn.last_insert_rowid()));
        debug!(%player_id, name = %player.full_name(), "inserted player");

        Ok(Player {
            player_id: Some(player_id),
            ..player.clone()
        })
    }

    pub fn find(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let result = self.conn.query_row(
            &format!(
                "SELECT {} FROM \"{}\" WHERE Player_Id = ?",
                COLUMNS,
                Player::TABLE
            ),
            params![player_id.as_i64()],
            row_to_player,
        );

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list(&self) -> Result<Vec<Player>> {
        self.query(
            &format!(
                "SELECT {} FROM \"{}\" ORDER BY Player_Id",
                COLUMNS,
                Player::TABLE
            ),
            params![],
        )
    }

    /// Players referencing `team_id`; the inverse side of the team link
    pub fn for_team(&self, team_id: TeamId) -> Result<Vec<Player>> {
        self.query(
            &format!(
                "SELECT {} FROM \"{}\" WHERE PlayerTeam_Team_Id = ? ORDER BY Player_Id",
                COLUMNS,
                Player::TABLE
            ),
            [team_id.as_i64()],
        )
    }

    /// Players without a team
    pub fn unassigned(&self) -> Result<Vec<Player>> {
        self.query(
            &format!(
                "SELECT {} FROM \"{}\" WHERE PlayerTeam_Team_Id IS NULL ORDER BY Player_Id",
                COLUMNS,
                Player::TABLE
            ),
            params![],
        )
    }

    /// A player and the team it references, if any
    pub fn with_team(&self, player_id: PlayerId) -> Result<Option<(Player, Option<Team>)>> {
        let Some(player) = self.find(player_id)? else {
            return Ok(None);
        };

        let team = match player.team_id {
            Some(team_id) => Teams::new(self.conn).find(team_id)?,
            None => None,
        };

        Ok(Some((player, team)))
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", Player::TABLE),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Overwrite the stored row with the player's fields
    pub fn update(&self, player: &Player) -> Result<()> {
        player.validate()?;
        let player_id = player.player_id.ok_or(RosterError::MissingId {
            entity: Player::NAME,
        })?;

        let rows_affected = self
            .conn
            .execute(
                &format!(
                    "UPDATE \"{}\"
                     SET FirstName = ?, LastName = ?, DateAdded = ?, PlayerTeam_Team_Id = ?
                     WHERE Player_Id = ?",
                    Player::TABLE
                ),
                params![
                    player.first_name,
                    player.last_name,
                    player.date_added,
                    player.team_id.map(|id| id.as_i64()),
                    player_id.as_i64()
                ],
            )
            .map_err(|e| write_failed(Player::NAME, "update", e))?;

        if rows_affected == 0 {
            return Err(RosterError::NotFound {
                entity: Player::NAME,
                id: player_id.as_i64(),
            });
        }
        debug!(%player_id, name = %player.full_name(), "updated player");
        Ok(())
    }

    /// Remove a player; returns `false` when no such player exists
    pub fn delete(&self, player_id: PlayerId) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute(
                &format!("DELETE FROM \"{}\" WHERE Player_Id = ?", Player::TABLE),
                params![player_id.as_i64()],
            )
            .map_err(|e| write_failed(Player::NAME, "delete", e))?;

        if rows_affected > 0 {
            debug!(%player_id, "deleted player");
        }
        Ok(rows_affected > 0)
    }

    /// Update the row with the player's identifier if it exists, insert it otherwise
    pub fn upsert(&self, player: &Player) -> Result<Upserted> {
        match player.player_id {
            Some(player_id) if self.find(player_id)?.is_some() => {
                self.update(player)?;
                Ok(Upserted::Updated)
            }
            _ => {
                self.insert(player)?;
                Ok(Upserted::Inserted)
            }
        }
    }

    fn query<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: Some(PlayerId::new(row.get(0)?)),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        date_added: row.get(3)?,
        team_id: row.get::<_, Option<i64>>(4)?.map(TeamId::new),
    })
}
