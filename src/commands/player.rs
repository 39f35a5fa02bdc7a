//! Player commands

use crate::{
    models::{Entity, Player},
    storage::RosterDb,
    PlayerId, Result, RosterError, TeamId,
};

pub fn handle_player_list(db: &RosterDb, team: Option<TeamId>, as_json: bool) -> Result<()> {
    let players = match team {
        Some(team_id) => db.players().for_team(team_id)?,
        None => db.players().list()?,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players");
    }
    for player in players {
        println!(
            "{:>4}  {:<30} team {:<4} added {}",
            player.player_id.map(|id| id.to_string()).unwrap_or_default(),
            player.full_name(),
            player.team_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            player.date_added_display()
        );
    }
    Ok(())
}

pub fn handle_player_add(
    db: &RosterDb,
    first_name: String,
    last_name: String,
    team: Option<TeamId>,
) -> Result<()> {
    let mut player = Player::new(first_name, last_name);
    player.team_id = team;

    let player = db.players().insert(&player)?;
    println!(
        "✓ Added player {} ({})",
        player.full_name(),
        player.player_id.map(|id| id.to_string()).unwrap_or_default()
    );
    Ok(())
}

pub fn handle_player_move(db: &RosterDb, player_id: PlayerId, team: Option<TeamId>) -> Result<()> {
    let players = db.players();
    let mut player = players.find(player_id)?.ok_or(RosterError::NotFound {
        entity: Player::NAME,
        id: player_id.as_i64(),
    })?;

    player.team_id = team;
    players.update(&player)?;

    match team {
        Some(team_id) => println!("✓ Moved {} to team {}", player.full_name(), team_id),
        None => println!("✓ {} no longer has a team", player.full_name()),
    }
    Ok(())
}

pub fn handle_player_remove(db: &RosterDb, player_id: PlayerId) -> Result<()> {
    if db.players().delete(player_id)? {
        println!("✓ Removed player {}", player_id);
        Ok(())
    } else {
        Err(RosterError::NotFound {
            entity: Player::NAME,
            id: player_id.as_i64(),
        })
    }
}
