//! CLI argument definitions and parsing.

use crate::{PlayerId, TeamId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum MigrateCmd {
    /// Apply pending migrations, then run the seed.
    Up {
        /// Skip the seed step.
        #[clap(long)]
        no_seed: bool,
    },

    /// Revert the most recently applied migration.
    Down,

    /// Revert every applied migration.
    Reset,

    /// Show applied and pending migrations.
    Status,
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// List all teams.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a team and its players.
    Show {
        team_id: TeamId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Add a team.
    Add { name: String },

    /// Rename a team.
    Rename { team_id: TeamId, name: String },

    /// Remove a team. Fails while players are still assigned to it.
    Remove { team_id: TeamId },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// List players, optionally only those on one team.
    List {
        /// Only players on this team.
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Add a player.
    Add {
        first_name: String,
        last_name: String,

        /// Team to assign the player to.
        #[clap(long, short)]
        team: Option<TeamId>,
    },

    /// Assign a player to a team, or clear the assignment when `--team` is omitted.
    Move {
        player_id: PlayerId,

        #[clap(long, short)]
        team: Option<TeamId>,
    },

    /// Remove a player.
    Remove { player_id: PlayerId },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the database schema
    Migrate {
        #[clap(subcommand)]
        cmd: MigrateCmd,
    },

    /// Insert or refresh the baseline teams and players
    Seed,

    /// Work with teams
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Work with players
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "team-roster", about = "Team roster store")]
pub struct RosterCli {
    /// Database file (or set `TEAM_ROSTER_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Enable debug logging.
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
