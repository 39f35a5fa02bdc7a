//! Baseline teams and players
//!
//! Every row is matched by its identifier: an existing row is overwritten
//! with the seed values, a missing one is inserted. Running the seed any
//! number of times leaves the same rows behind.

use crate::error::Result;
use crate::models::{Player, PlayerId, Team, TeamId};
use crate::storage::{RosterDb, Upserted};
use chrono::{Local, NaiveDateTime};
use tracing::info;

/// A seeded player, linked to a seeded team.
///
/// `DateAdded` is not part of the seed: new rows are stamped with the
/// current time and existing rows keep theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlayer {
    pub player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub team_id: TeamId,
}

impl SeedPlayer {
    pub fn new(player_id: i64, first_name: &str, last_name: &str, team_id: i64) -> Self {
        Self {
            player_id: PlayerId::new(player_id),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            team_id: TeamId::new(team_id),
        }
    }

    fn to_player(&self, date_added: NaiveDateTime) -> Player {
        Player::new(self.first_name.clone(), self.last_name.clone())
            .with_id(self.player_id)
            .with_team(self.team_id)
            .with_date_added(date_added)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    pub teams: Vec<Team>,
    pub players: Vec<SeedPlayer>,
}

impl SeedData {
    /// The two baseline teams and their ten players
    pub fn baseline() -> Self {
        Self {
            teams: vec![
                Team::with_id(TeamId::new(1), "Jets"),
                Team::with_id(TeamId::new(2), "Rockets"),
            ],
            players: vec![
                SeedPlayer::new(1, "Lee", "Puckett", 1),
                SeedPlayer::new(2, "Michael", "Brown", 2),
                SeedPlayer::new(3, "Elizabeth", "Gray", 1),
                SeedPlayer::new(4, "Irene", "Click", 2),
                SeedPlayer::new(5, "Lauren", "Wright", 1),
                SeedPlayer::new(6, "Chuck", "Winters", 2),
                SeedPlayer::new(7, "Amit", "Bania", 1),
                SeedPlayer::new(8, "Brad", "Hinton", 2),
                SeedPlayer::new(9, "Juanita", "Von Dwingelo", 1),
                // Identifier 0 is kept as a real key
                SeedPlayer::new(0, "Peter", "Nelson", 2),
            ],
        }
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self::baseline()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub teams_inserted: usize,
    pub teams_updated: usize,
    pub players_inserted: usize,
    pub players_updated: usize,
}

impl SeedReport {
    fn record_team(&mut self, outcome: Upserted) {
        match outcome {
            Upserted::Inserted => self.teams_inserted += 1,
            Upserted::Updated => self.teams_updated += 1,
        }
    }

    fn record_player(&mut self, outcome: Upserted) {
        match outcome {
            Upserted::Inserted => self.players_inserted += 1,
            Upserted::Updated => self.players_updated += 1,
        }
    }
}

/// Upsert every seed row by identifier in a single unit of work.
///
/// Teams go first so the players' team references resolve.
pub fn seed(db: &mut RosterDb, data: &SeedData) -> Result<SeedReport> {
    let report = db.unit_of_work(|uow| {
        let mut report = SeedReport::default();

        let teams = uow.teams();
        for team in &data.teams {
            report.record_team(teams.upsert(team)?);
        }

        let players = uow.players();
        for row in &data.players {
            let outcome = match players.find(row.player_id)? {
                Some(existing) => {
                    players.update(&row.to_player(existing.date_added))?;
                    Upserted::Updated
                }
                None => {
                    players.insert(&row.to_player(Local::now().naive_local()))?;
                    Upserted::Inserted
                }
            };
            report.record_player(outcome);
        }

        Ok(report)
    })?;

    info!(
        teams_inserted = report.teams_inserted,
        teams_updated = report.teams_updated,
        players_inserted = report.players_inserted,
        players_updated = report.players_updated,
        "seed complete"
    );
    Ok(report)
}
