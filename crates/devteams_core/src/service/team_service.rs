//! Team use-case service.
//!
//! # Invariants
//! - `add_programmer_to_team` resolves both ids before writing; a missing
//!   id leaves storage untouched.
//! - Saving is a full overwrite when the asset carries an id.

use super::{ServiceError, ServiceResult};
use crate::asset::{asset_to_team, team_to_asset, TeamAsset};
use crate::model::programmer::ProgrammerId;
use crate::model::team::TeamId;
use crate::repo::programmer_repo::ProgrammerRepository;
use crate::repo::team_repo::TeamRepository;
use log::{debug, info};

/// Team service facade over repository implementations.
pub struct TeamService<T: TeamRepository, P: ProgrammerRepository> {
    teams: T,
    programmers: P,
}

impl<T: TeamRepository, P: ProgrammerRepository> TeamService<T, P> {
    /// Creates a service using the provided repository implementations.
    pub fn new(teams: T, programmers: P) -> Self {
        Self { teams, programmers }
    }

    /// Gets one team by id.
    pub fn find_team(&self, team_id: TeamId) -> ServiceResult<Option<TeamAsset>> {
        let team = self.teams.find_team(team_id)?;
        debug!(
            "event=team_find module=service status=ok team_id={} found={}",
            team_id,
            team.is_some()
        );
        Ok(team.as_ref().map(team_to_asset))
    }

    /// Lists every team ordered by id.
    pub fn list_teams(&self) -> ServiceResult<Vec<TeamAsset>> {
        let teams = self.teams.list_teams()?;
        debug!(
            "event=team_list module=service status=ok count={}",
            teams.len()
        );
        Ok(teams.iter().map(team_to_asset).collect())
    }

    /// Saves a team and returns the stored asset with its assigned id.
    ///
    /// Existing programmer membership is kept when overwriting a team.
    pub fn save_team(&self, asset: &TeamAsset) -> ServiceResult<TeamAsset> {
        let mut team = asset_to_team(asset)?;
        if let Some(team_id) = team.id {
            if let Some(existing) = self.teams.find_team(team_id)? {
                team.programmers = existing.programmers;
            }
        }

        let saved = self.teams.save_team(&team)?;
        info!(
            "event=team_save module=service status=ok team_id={}",
            saved.id.unwrap_or_default()
        );
        Ok(team_to_asset(&saved))
    }

    /// Makes `programmer_id` a member of `team_id`.
    ///
    /// Re-adding an existing pair succeeds without changes. A programmer
    /// that belongs to another team is moved.
    ///
    /// # Errors
    /// - `ServiceError::TeamNotFound` / `ServiceError::ProgrammerNotFound`
    ///   when either id does not resolve.
    pub fn add_programmer_to_team(
        &self,
        team_id: TeamId,
        programmer_id: ProgrammerId,
    ) -> ServiceResult<()> {
        let team = self.teams.find_team(team_id)?;
        let programmer = self.programmers.find_programmer(programmer_id)?;

        let (mut team, mut programmer) = match (team, programmer) {
            (Some(team), Some(programmer)) => (team, programmer),
            (None, _) => return Err(ServiceError::TeamNotFound(team_id)),
            (_, None) => return Err(ServiceError::ProgrammerNotFound(programmer_id)),
        };

        team.add_programmer(&mut programmer)?;
        self.teams.save_team(&team)?;

        info!(
            "event=team_add_programmer module=service status=ok team_id={} programmer_id={}",
            team_id, programmer_id
        );
        Ok(())
    }
}
