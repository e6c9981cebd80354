use devteams_core::db::open_db_in_memory;
use devteams_core::{
    MappingError, ProgrammerAsset, ProgrammerService, ServiceError, SqliteProgrammerRepository,
    SqliteTeamRepository, TeamAsset, TeamService,
};
use rusqlite::Connection;

type Teams<'c> = TeamService<SqliteTeamRepository<'c>, SqliteProgrammerRepository<'c>>;
type Programmers<'c> = ProgrammerService<SqliteProgrammerRepository<'c>, SqliteTeamRepository<'c>>;

fn services(conn: &Connection) -> (Teams<'_>, Programmers<'_>) {
    let teams = SqliteTeamRepository::try_new(conn).unwrap();
    let programmers = SqliteProgrammerRepository::try_new(conn).unwrap();
    (
        TeamService::new(teams, programmers),
        ProgrammerService::new(programmers, teams),
    )
}

fn team_asset(name: &str) -> TeamAsset {
    TeamAsset {
        team_id: None,
        name: name.to_string(),
        team_focus: "Java".to_string(),
        last_stand_up: "2001-01-01T00:00:00".to_string(),
    }
}

fn programmer_asset(name: &str) -> ProgrammerAsset {
    ProgrammerAsset {
        programmer_id: None,
        name: name.to_string(),
        date_hired: "2015-09-01".to_string(),
        team_id: None,
        team_name: None,
    }
}

fn count_programmers_with_team(conn: &Connection) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM programmers WHERE team_id IS NOT NULL;",
        [],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn saved_team_reads_back_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let (teams, _) = services(&conn);

    let saved = teams.save_team(&team_asset("A")).unwrap();
    let id = saved.team_id.unwrap();

    let loaded = teams.find_team(id).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(
        loaded,
        TeamAsset {
            team_id: Some(id),
            ..team_asset("A")
        }
    );
}

#[test]
fn missing_team_is_none() {
    let conn = open_db_in_memory().unwrap();
    let (teams, programmers) = services(&conn);

    assert_eq!(teams.find_team(420).unwrap(), None);
    assert_eq!(programmers.find_programmer(420).unwrap(), None);
    assert!(teams.list_teams().unwrap().is_empty());
    assert!(programmers.list_programmers(None).unwrap().is_empty());
}

#[test]
fn malformed_dates_surface_as_mapping_errors() {
    let conn = open_db_in_memory().unwrap();
    let (teams, programmers) = services(&conn);

    let mut bad_team = team_asset("A");
    bad_team.last_stand_up = "yesterday".to_string();
    let err = teams.save_team(&bad_team).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Mapping(MappingError::InvalidDateTime { .. })
    ));

    let mut bad_programmer = programmer_asset("ada");
    bad_programmer.date_hired = "2015-13-01".to_string();
    let err = programmers.save_programmer(&bad_programmer).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Mapping(MappingError::InvalidDate { .. })
    ));
    assert!(teams.list_teams().unwrap().is_empty());
}

#[test]
fn add_programmer_denormalizes_team_on_programmer_assets() {
    let conn = open_db_in_memory().unwrap();
    let (teams, programmers) = services(&conn);

    let team = teams.save_team(&team_asset("Core")).unwrap();
    let programmer = programmers.save_programmer(&programmer_asset("ada")).unwrap();
    assert_eq!(programmer.team_id, None);

    let team_id = team.team_id.unwrap();
    let programmer_id = programmer.programmer_id.unwrap();
    teams.add_programmer_to_team(team_id, programmer_id).unwrap();

    let loaded = programmers.find_programmer(programmer_id).unwrap().unwrap();
    assert_eq!(loaded.team_id, Some(team_id));
    assert_eq!(loaded.team_name.as_deref(), Some("Core"));

    let members = programmers.list_programmers(Some(team_id)).unwrap();
    assert_eq!(members, vec![loaded]);
}

#[test]
fn add_programmer_twice_keeps_reference() {
    let conn = open_db_in_memory().unwrap();
    let (teams, programmers) = services(&conn);

    let team_id = teams.save_team(&team_asset("Core")).unwrap().team_id.unwrap();
    let programmer_id = programmers
        .save_programmer(&programmer_asset("ada"))
        .unwrap()
        .programmer_id
        .unwrap();

    teams.add_programmer_to_team(team_id, programmer_id).unwrap();
    teams.add_programmer_to_team(team_id, programmer_id).unwrap();

    let loaded = programmers.find_programmer(programmer_id).unwrap().unwrap();
    assert_eq!(loaded.team_id, Some(team_id));
    assert_eq!(programmers.list_programmers(Some(team_id)).unwrap().len(), 1);
}

#[test]
fn add_programmer_moves_between_teams() {
    let conn = open_db_in_memory().unwrap();
    let (teams, programmers) = services(&conn);

    let first = teams.save_team(&team_asset("First")).unwrap().team_id.unwrap();
    let second = teams.save_team(&team_asset("Second")).unwrap().team_id.unwrap();
    let programmer_id = programmers
        .save_programmer(&programmer_asset("ada"))
        .unwrap()
        .programmer_id
        .unwrap();

    teams.add_programmer_to_team(first, programmer_id).unwrap();
    teams.add_programmer_to_team(second, programmer_id).unwrap();

    assert!(programmers.list_programmers(Some(first)).unwrap().is_empty());
    let moved = programmers.find_programmer(programmer_id).unwrap().unwrap();
    assert_eq!(moved.team_name.as_deref(), Some("Second"));
}

#[test]
fn add_programmer_with_missing_side_leaves_store_unmodified() {
    let conn = open_db_in_memory().unwrap();
    let (teams, programmers) = services(&conn);

    let team_id = teams.save_team(&team_asset("Core")).unwrap().team_id.unwrap();
    let programmer_id = programmers
        .save_programmer(&programmer_asset("ada"))
        .unwrap()
        .programmer_id
        .unwrap();

    let err = teams.add_programmer_to_team(420, programmer_id).unwrap_err();
    assert!(matches!(err, ServiceError::TeamNotFound(420)));

    let err = teams.add_programmer_to_team(team_id, 420).unwrap_err();
    assert!(matches!(err, ServiceError::ProgrammerNotFound(420)));

    assert_eq!(count_programmers_with_team(&conn), 0);
    assert_eq!(teams.list_teams().unwrap().len(), 1);
}

#[test]
fn overwriting_team_keeps_membership() {
    let conn = open_db_in_memory().unwrap();
    let (teams, programmers) = services(&conn);

    let team_id = teams.save_team(&team_asset("Core")).unwrap().team_id.unwrap();
    let programmer_id = programmers
        .save_programmer(&programmer_asset("ada"))
        .unwrap()
        .programmer_id
        .unwrap();
    teams.add_programmer_to_team(team_id, programmer_id).unwrap();

    let renamed = TeamAsset {
        team_id: Some(team_id),
        ..team_asset("Platform")
    };
    assert_eq!(teams.save_team(&renamed).unwrap(), renamed);

    let member = programmers.find_programmer(programmer_id).unwrap().unwrap();
    assert_eq!(member.team_name.as_deref(), Some("Platform"));
}
