//! Schema and seed commands

use crate::{
    migration::{seed, update_database, Migrator, SeedData, SeedReport},
    storage::RosterDb,
    Result,
};

/// Apply pending migrations, then seed unless `no_seed`
pub fn handle_migrate_up(db: &mut RosterDb, no_seed: bool) -> Result<()> {
    let data = SeedData::baseline();
    let report = update_database(db, if no_seed { None } else { Some(&data) })?;

    if report.applied.is_empty() {
        println!("Schema already up to date");
    }
    for id in &report.applied {
        println!("✓ Applied {}", id);
    }
    if let Some(seeded) = report.seeded {
        print_seed_report(&seeded);
    }
    Ok(())
}

pub fn handle_migrate_down(db: &mut RosterDb) -> Result<()> {
    match Migrator::new(db)?.down()? {
        Some(id) => println!("✓ Reverted {}", id),
        None => println!("No migrations to revert"),
    }
    Ok(())
}

pub fn handle_migrate_reset(db: &mut RosterDb) -> Result<()> {
    let reverted = Migrator::new(db)?.reset()?;
    if reverted.is_empty() {
        println!("No migrations to revert");
    }
    for id in reverted {
        println!("✓ Reverted {}", id);
    }
    Ok(())
}

pub fn handle_migrate_status(db: &mut RosterDb) -> Result<()> {
    let migrator = Migrator::new(db)?;
    println!("Schema: {:?}", migrator.state()?);
    for id in migrator.applied()? {
        println!("  applied  {}", id);
    }
    for id in migrator.pending()? {
        println!("  pending  {}", id);
    }
    Ok(())
}

pub fn handle_seed(db: &mut RosterDb) -> Result<()> {
    let report = seed(db, &SeedData::baseline())?;
    print_seed_report(&report);
    Ok(())
}

fn print_seed_report(report: &SeedReport) {
    println!(
        "✓ Seeded teams ({} inserted, {} updated) and players ({} inserted, {} updated)",
        report.teams_inserted, report.teams_updated, report.players_inserted, report.players_updated
    );
}
