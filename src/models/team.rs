//! The `Team` entity

use super::{Entity, Player, TeamId};
use serde::{Deserialize, Serialize};

/// A team players can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: Option<TeamId>,
    pub team_name: String,
}

impl Team {
    /// Unsaved team; the store assigns `team_id` on insert.
    pub fn new(team_name: impl Into<String>) -> Self {
        Self {
            team_id: None,
            team_name: team_name.into(),
        }
    }

    /// Team with a fixed identifier, as used by seed data.
    pub fn with_id(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id: Some(team_id),
            team_name: team_name.into(),
        }
    }
}

impl Entity for Team {
    const NAME: &'static str = "Team";
    const PRIMARY_KEY: &'static str = "Team_Id";

    type Id = TeamId;

    fn id(&self) -> Option<TeamId> {
        self.team_id
    }
}

/// A team together with the players currently referencing it.
///
/// Players are not stored on the team; this is materialized from a query
/// on `PlayerTeam_Team_Id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub team: Team,
    pub players: Vec<Player>,
}
