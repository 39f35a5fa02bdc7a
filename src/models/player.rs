//! The `Player` entity

use super::{Entity, PlayerId, TeamId};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Display and edit format for `DateAdded`
pub const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// A player, optionally assigned to one team.
///
/// The team link is the foreign key only. The team does not own the player
/// and the player does not own the team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: Option<PlayerId>,
    pub first_name: String,
    pub last_name: String,
    pub date_added: NaiveDateTime,
    pub team_id: Option<TeamId>,
}

impl Player {
    /// Unsaved, unassigned player added now.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            player_id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_added: Local::now().naive_local(),
            team_id: None,
        }
    }

    pub fn with_id(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_date_added(mut self, date_added: NaiveDateTime) -> Self {
        self.date_added = date_added;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `DateAdded` rendered as `yyyy-MM-dd`
    pub fn date_added_display(&self) -> String {
        self.date_added.format(DATE_DISPLAY_FORMAT).to_string()
    }
}

impl Entity for Player {
    const NAME: &'static str = "Player";
    const PRIMARY_KEY: &'static str = "Player_Id";

    type Id = PlayerId;

    fn id(&self) -> Option<PlayerId> {
        self.player_id
    }
}
