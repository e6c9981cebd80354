//! Team repository contract and SQLite implementation.
//!
//! # Invariants
//! - `save_team` writes the team row and the back-reference of every listed
//!   programmer in one transaction.
//! - A team's programmer collection is read from `programmers.team_id`,
//!   ordered by programmer name then id.

use super::{ensure_connection_ready, RepoError, RepoResult};
use crate::model::programmer::ProgrammerId;
use crate::model::team::{Team, TeamId};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const TEAM_SELECT_SQL: &str = "SELECT
    id,
    name,
    team_focus,
    last_stand_up
FROM teams";

/// Persistence gateway for teams.
pub trait TeamRepository {
    /// Inserts or overwrites `team` and cascades programmer back-references.
    ///
    /// Assigns an id when `team.id` is `None`. Returns the stored state.
    fn save_team(&self, team: &Team) -> RepoResult<Team>;
    /// Gets one team by id.
    fn find_team(&self, id: TeamId) -> RepoResult<Option<Team>>;
    /// Lists all teams ordered by id.
    fn list_teams(&self) -> RepoResult<Vec<Team>>;
}

/// SQLite-backed team repository.
#[derive(Clone, Copy)]
pub struct SqliteTeamRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTeamRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "teams")?;
        Ok(Self { conn })
    }
}

impl TeamRepository for SqliteTeamRepository<'_> {
    fn save_team(&self, team: &Team) -> RepoResult<Team> {
        let tx = self.conn.unchecked_transaction()?;

        let team_id = match team.id {
            Some(id) => {
                tx.execute(
                    "INSERT INTO teams (id, name, team_focus, last_stand_up)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT (id) DO UPDATE SET
                        name = excluded.name,
                        team_focus = excluded.team_focus,
                        last_stand_up = excluded.last_stand_up;",
                    params![id, team.name, team.team_focus, team.last_stand_up],
                )?;
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO teams (name, team_focus, last_stand_up)
                     VALUES (?1, ?2, ?3);",
                    params![team.name, team.team_focus, team.last_stand_up],
                )?;
                tx.last_insert_rowid()
            }
        };

        for programmer_id in &team.programmers {
            let changed = tx.execute(
                "UPDATE programmers SET team_id = ?1 WHERE id = ?2;",
                params![team_id, programmer_id],
            )?;
            if changed == 0 {
                return Err(RepoError::NotFound {
                    entity: "programmer",
                    id: *programmer_id,
                });
            }
        }

        tx.commit()?;
        debug!(
            "event=team_save module=repo status=ok team_id={} cascaded={}",
            team_id,
            team.programmers.len()
        );

        self.find_team(team_id)?.ok_or(RepoError::NotFound {
            entity: "team",
            id: team_id,
        })
    }

    fn find_team(&self, id: TeamId) -> RepoResult<Option<Team>> {
        let team = self
            .conn
            .query_row(
                &format!("{TEAM_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_team_row,
            )
            .optional()?;

        match team {
            Some(mut team) => {
                team.programmers = load_programmer_ids(self.conn, id)?;
                Ok(Some(team))
            }
            None => Ok(None),
        }
    }

    fn list_teams(&self) -> RepoResult<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TEAM_SELECT_SQL} ORDER BY id ASC;"))?;
        let rows = stmt.query_map([], parse_team_row)?;

        let mut teams = Vec::new();
        for row in rows {
            let mut team = row?;
            if let Some(id) = team.id {
                team.programmers = load_programmer_ids(self.conn, id)?;
            }
            teams.push(team);
        }

        Ok(teams)
    }
}

fn parse_team_row(row: &Row<'_>) -> rusqlite::Result<Team> {
    Ok(Team {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        team_focus: row.get("team_focus")?,
        last_stand_up: row.get("last_stand_up")?,
        programmers: Vec::new(),
    })
}

fn load_programmer_ids(conn: &Connection, team_id: TeamId) -> RepoResult<Vec<ProgrammerId>> {
    let mut stmt = conn.prepare(
        "SELECT id
         FROM programmers
         WHERE team_id = ?1
         ORDER BY name ASC, id ASC;",
    )?;
    let ids = stmt
        .query_map([team_id], |row| row.get(0))?
        .collect::<Result<Vec<ProgrammerId>, _>>()?;
    Ok(ids)
}
