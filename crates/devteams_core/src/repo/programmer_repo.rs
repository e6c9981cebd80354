//! Programmer repository contract and SQLite implementation.
//!
//! # Invariants
//! - `programmers.team_id` is written only by the team cascade in
//!   `TeamRepository::save_team`. `save_programmer` never touches it.
//! - Team-filtered listings are ordered by name then id.

use super::{ensure_connection_ready, RepoError, RepoResult};
use crate::model::programmer::{Programmer, ProgrammerId};
use crate::model::team::TeamId;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const PROGRAMMER_SELECT_SQL: &str = "SELECT
    id,
    name,
    date_hired,
    team_id
FROM programmers";

/// Persistence gateway for programmers.
pub trait ProgrammerRepository {
    /// Inserts or overwrites `programmer`, assigning an id when absent.
    ///
    /// Returns the stored state, including any existing team link.
    fn save_programmer(&self, programmer: &Programmer) -> RepoResult<Programmer>;
    /// Gets one programmer by id.
    fn find_programmer(&self, id: ProgrammerId) -> RepoResult<Option<Programmer>>;
    /// Lists all programmers ordered by id.
    fn list_programmers(&self) -> RepoResult<Vec<Programmer>>;
    /// Lists the programmers whose back-reference is `team_id`.
    fn list_programmers_by_team(&self, team_id: TeamId) -> RepoResult<Vec<Programmer>>;
}

/// SQLite-backed programmer repository.
#[derive(Clone, Copy)]
pub struct SqliteProgrammerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProgrammerRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "programmers")?;
        Ok(Self { conn })
    }

    fn query_programmers(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> RepoResult<Vec<Programmer>> {
        let mut stmt = self.conn.prepare(sql)?;
        let programmers = stmt
            .query_map(params, parse_programmer_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(programmers)
    }
}

impl ProgrammerRepository for SqliteProgrammerRepository<'_> {
    fn save_programmer(&self, programmer: &Programmer) -> RepoResult<Programmer> {
        let programmer_id = match programmer.id {
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO programmers (id, name, date_hired)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT (id) DO UPDATE SET
                        name = excluded.name,
                        date_hired = excluded.date_hired;",
                    params![id, programmer.name, programmer.date_hired],
                )?;
                id
            }
            None => {
                self.conn.execute(
                    "INSERT INTO programmers (name, date_hired) VALUES (?1, ?2);",
                    params![programmer.name, programmer.date_hired],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        debug!("event=programmer_save module=repo status=ok programmer_id={programmer_id}");

        self.find_programmer(programmer_id)?
            .ok_or(RepoError::NotFound {
                entity: "programmer",
                id: programmer_id,
            })
    }

    fn find_programmer(&self, id: ProgrammerId) -> RepoResult<Option<Programmer>> {
        let programmer = self
            .conn
            .query_row(
                &format!("{PROGRAMMER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_programmer_row,
            )
            .optional()?;
        Ok(programmer)
    }

    fn list_programmers(&self) -> RepoResult<Vec<Programmer>> {
        self.query_programmers(&format!("{PROGRAMMER_SELECT_SQL} ORDER BY id ASC;"), params![])
    }

    fn list_programmers_by_team(&self, team_id: TeamId) -> RepoResult<Vec<Programmer>> {
        self.query_programmers(
            &format!("{PROGRAMMER_SELECT_SQL} WHERE team_id = ?1 ORDER BY name ASC, id ASC;"),
            [team_id],
        )
    }
}

fn parse_programmer_row(row: &Row<'_>) -> rusqlite::Result<Programmer> {
    Ok(Programmer {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        date_hired: row.get("date_hired")?,
        team_id: row.get("team_id")?,
    })
}
