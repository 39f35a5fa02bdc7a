//! Unit tests for migrations and seeding

use super::*;
use crate::models::{PlayerId, Team, TeamId};
use crate::storage::SchemaObject;

fn fresh_db() -> RosterDb {
    RosterDb::open_in_memory().unwrap()
}

fn schema_after_up() -> Vec<SchemaObject> {
    let mut db = fresh_db();
    Migrator::new(&mut db).unwrap().up().unwrap();
    db.schema_objects().unwrap()
}

/// Migration that creates a table and then fails
struct BrokenMigration;

impl Migration for BrokenMigration {
    fn id(&self) -> &'static str {
        "201801010000000_Broken"
    }

    fn up(&self, conn: &Connection) -> Result<()> {
        conn.execute("CREATE TABLE Coach (Coach_Id INTEGER PRIMARY KEY)", [])?;
        conn.execute("CREATE TABLE Coach (Coach_Id INTEGER PRIMARY KEY)", [])?;
        Ok(())
    }

    fn down(&self, conn: &Connection) -> Result<()> {
        conn.execute("DROP TABLE Coach", [])?;
        Ok(())
    }
}

#[test]
fn test_initial_state_is_absent() {
    let mut db = fresh_db();
    let migrator = Migrator::new(&mut db).unwrap();

    assert_eq!(migrator.state().unwrap(), SchemaState::Absent);
    assert!(migrator.applied().unwrap().is_empty());
    assert_eq!(
        migrator.pending().unwrap(),
        vec!["201711011918004_InitialCreate"]
    );
}

#[test]
fn test_up_creates_schema() {
    let mut db = fresh_db();
    let applied = Migrator::new(&mut db).unwrap().up().unwrap();
    assert_eq!(applied, vec!["201711011918004_InitialCreate"]);

    let objects = db.schema_objects().unwrap();
    let names: Vec<_> = objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["IX_PlayerTeam_Team_Id", "Player", "Team"]);

    let index = &objects[0];
    assert_eq!(index.kind, "index");
    assert_eq!(index.table, "Player");

    let player_sql = objects[1].sql.as_deref().unwrap();
    assert!(player_sql.contains("PlayerTeam_Team_Id INTEGER NULL"));
    assert!(player_sql.contains("REFERENCES \"Team\" (Team_Id)"));
    assert!(player_sql.contains("DateAdded DATETIME NOT NULL"));

    let team_sql = objects[2].sql.as_deref().unwrap();
    assert!(team_sql.contains("Team_Id INTEGER PRIMARY KEY AUTOINCREMENT"));
    assert!(team_sql.contains("TeamName VARCHAR(50) NOT NULL"));
}

#[test]
fn test_up_twice_applies_once() {
    let mut db = fresh_db();
    let mut migrator = Migrator::new(&mut db).unwrap();

    assert_eq!(migrator.up().unwrap().len(), 1);
    assert!(migrator.up().unwrap().is_empty());
    assert_eq!(migrator.state().unwrap(), SchemaState::Present);
    assert!(migrator.pending().unwrap().is_empty());
}

#[test]
fn test_down_restores_empty_schema() {
    let mut db = fresh_db();
    let before = db.schema_objects().unwrap();

    let mut migrator = Migrator::new(&mut db).unwrap();
    migrator.up().unwrap();
    assert_eq!(
        migrator.down().unwrap(),
        Some("201711011918004_InitialCreate")
    );
    assert_eq!(migrator.state().unwrap(), SchemaState::Absent);

    assert_eq!(db.schema_objects().unwrap(), before);
    assert!(before.is_empty());
}

#[test]
fn test_down_on_absent_is_noop() {
    let mut db = fresh_db();
    let mut migrator = Migrator::new(&mut db).unwrap();
    assert_eq!(migrator.down().unwrap(), None);
    assert_eq!(migrator.state().unwrap(), SchemaState::Absent);
}

#[test]
fn test_up_down_up_matches_single_up() {
    let mut db = fresh_db();
    {
        let mut migrator = Migrator::new(&mut db).unwrap();
        migrator.up().unwrap();
        migrator.down().unwrap();
        migrator.up().unwrap();
    }

    assert_eq!(db.schema_objects().unwrap(), schema_after_up());
}

#[test]
fn test_repeated_cycles_leave_same_schema() {
    let mut db = fresh_db();
    let mut migrator = Migrator::new(&mut db).unwrap();
    for _ in 0..3 {
        migrator.up().unwrap();
        migrator.down().unwrap();
    }
    drop(migrator);

    assert!(db.schema_objects().unwrap().is_empty());
}

#[test]
fn test_down_with_data_present() {
    let mut db = fresh_db();
    update_database(&mut db, Some(&SeedData::baseline())).unwrap();

    let reverted = Migrator::new(&mut db).unwrap().reset().unwrap();
    assert_eq!(reverted, vec!["201711011918004_InitialCreate"]);
    assert!(!db.table_exists("Team").unwrap());
    assert!(!db.table_exists("Player").unwrap());
}

#[test]
fn test_up_fails_when_table_exists() {
    let mut db = fresh_db();
    db.conn
        .execute("CREATE TABLE Player (Player_Id INTEGER PRIMARY KEY)", [])
        .unwrap();

    let mut migrator = Migrator::new(&mut db).unwrap();
    let err = migrator.up().unwrap_err();
    match err {
        RosterError::Migration { migration, message } => {
            assert_eq!(migration, "201711011918004_InitialCreate");
            assert!(message.contains("already exists"), "{message}");
        }
        other => panic!("Expected Migration error, got {other:?}"),
    }
    assert!(migrator.applied().unwrap().is_empty());
    drop(migrator);

    // Team was created before the failure and rolled back with it
    assert!(!db.table_exists("Team").unwrap());
}

#[test]
fn test_failed_migration_is_atomic() {
    let mut db = fresh_db();
    let mut migrator = Migrator::with_migrations(
        &mut db,
        vec![
            Box::new(InitialCreate) as Box<dyn Migration>,
            Box::new(BrokenMigration),
        ],
    )
    .unwrap();

    assert!(matches!(
        migrator.up().unwrap_err(),
        RosterError::Migration { .. }
    ));
    assert_eq!(
        migrator.applied().unwrap(),
        vec!["201711011918004_InitialCreate".to_string()]
    );
    assert_eq!(migrator.pending().unwrap(), vec!["201801010000000_Broken"]);
    drop(migrator);

    assert!(db.table_exists("Team").unwrap());
    assert!(!db.table_exists("Coach").unwrap());
}

#[test]
fn test_seed_baseline() {
    let mut db = fresh_db();
    let report = update_database(&mut db, Some(&SeedData::baseline()))
        .unwrap()
        .seeded
        .unwrap();

    assert_eq!(report.teams_inserted, 2);
    assert_eq!(report.players_inserted, 10);
    assert_eq!(report.teams_updated + report.players_updated, 0);

    let teams = db.teams().list().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0], Team::with_id(TeamId::new(1), "Jets"));
    assert_eq!(teams[1], Team::with_id(TeamId::new(2), "Rockets"));

    let lee = db.players().find(PlayerId::new(1)).unwrap().unwrap();
    assert_eq!(lee.first_name, "Lee");
    assert_eq!(lee.last_name, "Puckett");
    assert_eq!(lee.team_id, Some(TeamId::new(1)));

    let peter = db.players().find(PlayerId::new(0)).unwrap().unwrap();
    assert_eq!(peter.full_name(), "Peter Nelson");
    assert_eq!(peter.team_id, Some(TeamId::new(2)));

    assert_eq!(db.players().for_team(TeamId::new(1)).unwrap().len(), 5);
    assert_eq!(db.players().for_team(TeamId::new(2)).unwrap().len(), 5);
}

#[test]
fn test_seed_twice_is_idempotent() {
    let mut db = fresh_db();
    Migrator::new(&mut db).unwrap().up().unwrap();

    seed(&mut db, &SeedData::baseline()).unwrap();
    let teams_after_first = db.teams().list().unwrap();
    let players_after_first = db.players().list().unwrap();

    let report = seed(&mut db, &SeedData::baseline()).unwrap();
    assert_eq!(report.teams_inserted + report.players_inserted, 0);
    assert_eq!(report.teams_updated, 2);
    assert_eq!(report.players_updated, 10);

    assert_eq!(db.teams().list().unwrap(), teams_after_first);
    assert_eq!(db.players().list().unwrap(), players_after_first);
}

#[test]
fn test_seed_overwrites_external_edits() {
    let mut db = fresh_db();
    update_database(&mut db, Some(&SeedData::baseline())).unwrap();

    let mut lee = db.players().find(PlayerId::new(1)).unwrap().unwrap();
    lee.first_name = "Leland".to_string();
    lee.team_id = Some(TeamId::new(2));
    db.players().update(&lee).unwrap();
    db.teams()
        .update(&Team::with_id(TeamId::new(2), "Comets"))
        .unwrap();

    seed(&mut db, &SeedData::baseline()).unwrap();

    let lee = db.players().find(PlayerId::new(1)).unwrap().unwrap();
    assert_eq!(lee.first_name, "Lee");
    assert_eq!(lee.team_id, Some(TeamId::new(1)));
    assert_eq!(
        db.teams().find(TeamId::new(2)).unwrap().unwrap().team_name,
        "Rockets"
    );
}

#[test]
fn test_changed_seed_definition_updates_in_place() {
    let mut db = fresh_db();
    update_database(&mut db, Some(&SeedData::baseline())).unwrap();

    let mut data = SeedData::baseline();
    data.teams[0].team_name = "Hawks".to_string();
    seed(&mut db, &data).unwrap();

    let teams = db.teams().list().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0], Team::with_id(TeamId::new(1), "Hawks"));
    assert!(db.teams().find_by_name("Jets").unwrap().is_none());
}

#[test]
fn test_seed_keeps_extra_rows() {
    let mut db = fresh_db();
    update_database(&mut db, Some(&SeedData::baseline())).unwrap();
    db.players()
        .insert(&crate::models::Player::new("Free", "Agent"))
        .unwrap();

    seed(&mut db, &SeedData::baseline()).unwrap();
    assert_eq!(db.players().count().unwrap(), 11);
}

#[test]
fn test_invalid_seed_rolls_back() {
    let mut db = fresh_db();
    Migrator::new(&mut db).unwrap().up().unwrap();

    let mut data = SeedData::baseline();
    data.players[9].last_name = String::new();

    assert!(seed(&mut db, &data).unwrap_err().is_validation());
    assert_eq!(db.teams().count().unwrap(), 0);
    assert_eq!(db.players().count().unwrap(), 0);
}

#[test]
fn test_update_database_without_seed() {
    let mut db = fresh_db();
    let report = update_database(&mut db, None).unwrap();

    assert_eq!(report.applied, vec!["201711011918004_InitialCreate"]);
    assert!(report.seeded.is_none());
    assert_eq!(db.teams().count().unwrap(), 0);
}

#[test]
fn test_update_database_seeds_when_already_migrated() {
    let mut db = fresh_db();
    update_database(&mut db, None).unwrap();

    let report = update_database(&mut db, Some(&SeedData::baseline())).unwrap();
    assert!(report.applied.is_empty());
    assert_eq!(report.seeded.unwrap().players_inserted, 10);
}
