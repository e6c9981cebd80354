//! Programmer entity.

use super::team::TeamId;
use chrono::NaiveDate;

/// Surrogate key of a Programmer row.
pub type ProgrammerId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Programmer {
    /// `None` until the programmer is saved.
    pub id: Option<ProgrammerId>,
    pub name: String,
    pub date_hired: NaiveDate,
    /// Weak back-reference to the owning team, resolved by lookup.
    pub team_id: Option<TeamId>,
}

impl Programmer {
    /// Creates an unsaved programmer that belongs to no team.
    pub fn new(name: impl Into<String>, date_hired: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            date_hired,
            team_id: None,
        }
    }
}
