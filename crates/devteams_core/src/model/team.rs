//! Team entity.
//!
//! # Invariants
//! - `programmers` holds ids of owned Programmers in storage order.
//! - Every Programmer listed in `programmers` has `team_id == self.id`.
//!   Only [`Team::add_programmer`] establishes the pair.

use super::programmer::{Programmer, ProgrammerId};
use super::ModelError;
use chrono::NaiveDateTime;

/// Surrogate key of a Team row.
pub type TeamId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// `None` until the team is saved.
    pub id: Option<TeamId>,
    pub name: String,
    pub team_focus: String,
    /// Timestamp of the last status meeting.
    pub last_stand_up: NaiveDateTime,
    pub programmers: Vec<ProgrammerId>,
}

impl Team {
    /// Creates an unsaved team with no programmers.
    pub fn new(
        name: impl Into<String>,
        team_focus: impl Into<String>,
        last_stand_up: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            team_focus: team_focus.into(),
            last_stand_up,
            programmers: Vec::new(),
        }
    }

    /// Links `programmer` to this team in both directions.
    ///
    /// Re-adding a programmer that is already listed leaves the collection
    /// unchanged. Persist the team afterwards to cascade the back-reference.
    ///
    /// # Errors
    /// - `ModelError::Unsaved` when either side has no id yet.
    pub fn add_programmer(&mut self, programmer: &mut Programmer) -> Result<(), ModelError> {
        let team_id = self.id.ok_or(ModelError::Unsaved("team"))?;
        let programmer_id = programmer.id.ok_or(ModelError::Unsaved("programmer"))?;

        programmer.team_id = Some(team_id);
        if !self.programmers.contains(&programmer_id) {
            self.programmers.push(programmer_id);
        }
        Ok(())
    }
}
