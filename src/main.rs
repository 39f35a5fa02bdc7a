//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use team_roster::{
    cli::{Commands, MigrateCmd, PlayerCmd, RosterCli, TeamCmd},
    commands::{
        migrate::{
            handle_migrate_down, handle_migrate_reset, handle_migrate_status, handle_migrate_up,
            handle_seed,
        },
        open_db,
        player::{handle_player_add, handle_player_list, handle_player_move, handle_player_remove},
        team::{
            handle_team_add, handle_team_list, handle_team_remove, handle_team_rename,
            handle_team_show,
        },
    },
    logging::init_tracing,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = RosterCli::parse();
    init_tracing(app.debug)?;

    let mut db = open_db(app.db).context("failed to open roster database")?;

    match app.command {
        Commands::Migrate { cmd } => match cmd {
            MigrateCmd::Up { no_seed } => handle_migrate_up(&mut db, no_seed)?,
            MigrateCmd::Down => handle_migrate_down(&mut db)?,
            MigrateCmd::Reset => handle_migrate_reset(&mut db)?,
            MigrateCmd::Status => handle_migrate_status(&mut db)?,
        },

        Commands::Seed => handle_seed(&mut db)?,

        Commands::Team { cmd } => match cmd {
            TeamCmd::List { json } => handle_team_list(&db, json)?,
            TeamCmd::Show { team_id, json } => handle_team_show(&db, team_id, json)?,
            TeamCmd::Add { name } => handle_team_add(&db, name)?,
            TeamCmd::Rename { team_id, name } => handle_team_rename(&db, team_id, name)?,
            TeamCmd::Remove { team_id } => handle_team_remove(&db, team_id)?,
        },

        Commands::Player { cmd } => match cmd {
            PlayerCmd::List { team, json } => handle_player_list(&db, team, json)?,
            PlayerCmd::Add {
                first_name,
                last_name,
                team,
            } => handle_player_add(&db, first_name, last_name, team)?,
            PlayerCmd::Move { player_id, team } => handle_player_move(&db, player_id, team)?,
            PlayerCmd::Remove { player_id } => handle_player_remove(&db, player_id)?,
        },
    }

    Ok(())
}
