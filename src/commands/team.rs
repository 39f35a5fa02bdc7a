//! Team commands

use crate::{
    models::{Entity, Team},
    storage::RosterDb,
    Result, RosterError, TeamId,
};

pub fn handle_team_list(db: &RosterDb, as_json: bool) -> Result<()> {
    let teams = db.teams().list()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
        return Ok(());
    }

    if teams.is_empty() {
        println!("No teams");
    }
    for team in teams {
        println!(
            "{:>4}  {}",
            team.team_id.map(|id| id.to_string()).unwrap_or_default(),
            team.team_name
        );
    }
    Ok(())
}

pub fn handle_team_show(db: &RosterDb, team_id: TeamId, as_json: bool) -> Result<()> {
    let roster = db.teams().roster(team_id)?.ok_or(RosterError::NotFound {
        entity: Team::NAME,
        id: team_id.as_i64(),
    })?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
        return Ok(());
    }

    println!("{} ({} players)", roster.team.team_name, roster.players.len());
    for player in &roster.players {
        println!(
            "{:>4}  {:<30} added {}",
            player.player_id.map(|id| id.to_string()).unwrap_or_default(),
            player.full_name(),
            player.date_added_display()
        );
    }
    Ok(())
}

pub fn handle_team_add(db: &RosterDb, name: String) -> Result<()> {
    let team = db.teams().insert(&Team::new(name))?;
    println!(
        "✓ Added team {} ({})",
        team.team_name,
        team.team_id.map(|id| id.to_string()).unwrap_or_default()
    );
    Ok(())
}

pub fn handle_team_rename(db: &RosterDb, team_id: TeamId, name: String) -> Result<()> {
    db.teams().update(&Team::with_id(team_id, name))?;
    println!("✓ Renamed team {}", team_id);
    Ok(())
}

pub fn handle_team_remove(db: &RosterDb, team_id: TeamId) -> Result<()> {
    if db.teams().delete(team_id)? {
        println!("✓ Removed team {}", team_id);
        Ok(())
    } else {
        Err(RosterError::NotFound {
            entity: Team::NAME,
            id: team_id.as_i64(),
        })
    }
}
