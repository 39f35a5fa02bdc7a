//! Integration tests for the schema lifecycle and seed

use team_roster::{
    migration::{seed, update_database, Migrator, SchemaState, SeedData},
    storage::RosterDb,
    PlayerId, Team, TeamId,
};

#[test]
fn test_schema_lifecycle() {
    let mut db = RosterDb::open_in_memory().unwrap();
    let initial = db.schema_objects().unwrap();

    let mut migrator = Migrator::new(&mut db).unwrap();
    assert_eq!(migrator.state().unwrap(), SchemaState::Absent);

    migrator.up().unwrap();
    assert_eq!(migrator.state().unwrap(), SchemaState::Present);
    drop(migrator);
    let after_up = db.schema_objects().unwrap();

    let mut migrator = Migrator::new(&mut db).unwrap();
    migrator.down().unwrap();
    assert_eq!(migrator.state().unwrap(), SchemaState::Absent);
    drop(migrator);
    assert_eq!(db.schema_objects().unwrap(), initial);

    Migrator::new(&mut db).unwrap().up().unwrap();
    assert_eq!(db.schema_objects().unwrap(), after_up);
}

#[test]
fn test_seed_scenario() {
    let mut db = RosterDb::open_in_memory().unwrap();
    update_database(&mut db, Some(&SeedData::baseline())).unwrap();

    assert_eq!(
        db.teams().find(TeamId::new(1)).unwrap(),
        Some(Team::with_id(TeamId::new(1), "Jets"))
    );
    assert_eq!(
        db.teams().find(TeamId::new(2)).unwrap(),
        Some(Team::with_id(TeamId::new(2), "Rockets"))
    );

    let lee = db.players().find(PlayerId::new(1)).unwrap().unwrap();
    assert_eq!(lee.full_name(), "Lee Puckett");
    assert_eq!(lee.team_id, Some(TeamId::new(1)));

    let mut data = SeedData::baseline();
    data.teams[0].team_name = "Hawks".to_string();
    seed(&mut db, &data).unwrap();

    assert_eq!(db.teams().count().unwrap(), 2);
    assert_eq!(
        db.teams().find(TeamId::new(1)).unwrap().unwrap().team_name,
        "Hawks"
    );
}

#[test]
fn test_seed_repeated_runs() {
    let mut db = RosterDb::open_in_memory().unwrap();
    update_database(&mut db, Some(&SeedData::baseline())).unwrap();
    let teams = db.teams().list().unwrap();
    let players = db.players().list().unwrap();

    for _ in 0..3 {
        seed(&mut db, &SeedData::default()).unwrap();
        assert_eq!(db.teams().list().unwrap(), teams);
        assert_eq!(db.players().list().unwrap(), players);
    }
    assert_eq!(teams.len(), 2);
    assert_eq!(players.len(), 10);
}

#[test]
fn test_seed_requires_schema() {
    let mut db = RosterDb::open_in_memory().unwrap();
    let err = seed(&mut db, &SeedData::baseline()).unwrap_err();
    assert!(err.to_string().contains("no such table"), "{err}");
}
