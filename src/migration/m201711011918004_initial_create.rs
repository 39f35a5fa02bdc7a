//! Initial schema: `Team`, `Player` and the index on the player's team key

use super::Migration;
use crate::error::Result;
use crate::models::{Entity, Player, Team};
use rusqlite::Connection;

pub const TEAM_INDEX: &str = "IX_PlayerTeam_Team_Id";

pub struct InitialCreate;

impl Migration for InitialCreate {
    fn id(&self) -> &'static str {
        "201711011918004_InitialCreate"
    }

    fn up(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            &format!(
                "CREATE TABLE \"{team}\" (
                    Team_Id INTEGER PRIMARY KEY AUTOINCREMENT,
                    TeamName VARCHAR(50) NOT NULL
                )",
                team = Team::TABLE
            ),
            [],
        )?;

        conn.execute(
            &format!(
                "CREATE TABLE \"{player}\" (
                    Player_Id INTEGER PRIMARY KEY AUTOINCREMENT,
                    FirstName VARCHAR(50) NOT NULL,
                    LastName VARCHAR(50) NOT NULL,
                    DateAdded DATETIME NOT NULL,
                    PlayerTeam_Team_Id INTEGER NULL,
                    CONSTRAINT \"FK_{player}_{team}_PlayerTeam_Team_Id\"
                        FOREIGN KEY (PlayerTeam_Team_Id) REFERENCES \"{team}\" (Team_Id)
                )",
                player = Player::TABLE,
                team = Team::TABLE
            ),
            [],
        )?;

        conn.execute(
            &format!(
                "CREATE INDEX \"{}\" ON \"{}\" (PlayerTeam_Team_Id)",
                TEAM_INDEX,
                Player::TABLE
            ),
            [],
        )?;

        Ok(())
    }

    /// Reverse of `up`. SQLite keeps the foreign key inside the `Player`
    /// definition, so dropping that table is what drops the constraint; it
    /// has to go before `Team` for the referenced table to be droppable.
    fn down(&self, conn: &Connection) -> Result<()> {
        conn.execute(&format!("DROP INDEX \"{}\"", TEAM_INDEX), [])?;
        conn.execute(&format!("DROP TABLE \"{}\"", Player::TABLE), [])?;
        conn.execute(&format!("DROP TABLE \"{}\"", Team::TABLE), [])?;
        Ok(())
    }
}
