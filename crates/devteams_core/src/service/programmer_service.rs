//! Programmer use-case service.
//!
//! Resolves each programmer's back-reference with an explicit team lookup
//! so assets can carry the owner's id and name.

use super::ServiceResult;
use crate::asset::{asset_to_programmer, programmer_to_asset, ProgrammerAsset};
use crate::model::programmer::{Programmer, ProgrammerId};
use crate::model::team::{Team, TeamId};
use crate::repo::programmer_repo::ProgrammerRepository;
use crate::repo::team_repo::TeamRepository;
use log::{debug, info};
use std::collections::HashMap;

/// Programmer service facade over repository implementations.
pub struct ProgrammerService<P: ProgrammerRepository, T: TeamRepository> {
    programmers: P,
    teams: T,
}

impl<P: ProgrammerRepository, T: TeamRepository> ProgrammerService<P, T> {
    /// Creates a service using the provided repository implementations.
    pub fn new(programmers: P, teams: T) -> Self {
        Self { programmers, teams }
    }

    /// Gets one programmer by id.
    pub fn find_programmer(
        &self,
        programmer_id: ProgrammerId,
    ) -> ServiceResult<Option<ProgrammerAsset>> {
        let Some(programmer) = self.programmers.find_programmer(programmer_id)? else {
            debug!(
                "event=programmer_find module=service status=ok programmer_id={programmer_id} found=false"
            );
            return Ok(None);
        };

        let team = match programmer.team_id {
            Some(team_id) => self.teams.find_team(team_id)?,
            None => None,
        };
        Ok(Some(programmer_to_asset(&programmer, team.as_ref())))
    }

    /// Lists programmers, optionally only those owned by `team_id`.
    ///
    /// Unfiltered listings are ordered by id; team listings by name.
    pub fn list_programmers(&self, team_id: Option<TeamId>) -> ServiceResult<Vec<ProgrammerAsset>> {
        let programmers = match team_id {
            Some(team_id) => self.programmers.list_programmers_by_team(team_id)?,
            None => self.programmers.list_programmers()?,
        };
        debug!(
            "event=programmer_list module=service status=ok team_filter={} count={}",
            team_id.map_or_else(|| "none".to_string(), |id| id.to_string()),
            programmers.len()
        );
        self.to_assets(&programmers)
    }

    /// Saves a programmer and returns the stored asset with its assigned id.
    pub fn save_programmer(&self, asset: &ProgrammerAsset) -> ServiceResult<ProgrammerAsset> {
        let programmer = asset_to_programmer(asset)?;
        let saved = self.programmers.save_programmer(&programmer)?;
        info!(
            "event=programmer_save module=service status=ok programmer_id={}",
            saved.id.unwrap_or_default()
        );

        let team = match saved.team_id {
            Some(team_id) => self.teams.find_team(team_id)?,
            None => None,
        };
        Ok(programmer_to_asset(&saved, team.as_ref()))
    }

    fn to_assets(&self, programmers: &[Programmer]) -> ServiceResult<Vec<ProgrammerAsset>> {
        let mut teams: HashMap<TeamId, Option<Team>> = HashMap::new();
        let mut assets = Vec::with_capacity(programmers.len());

        for programmer in programmers {
            let team = match programmer.team_id {
                Some(team_id) => {
                    if !teams.contains_key(&team_id) {
                        let team = self.teams.find_team(team_id)?;
                        teams.insert(team_id, team);
                    }
                    teams.get(&team_id).and_then(Option::as_ref)
                }
                None => None,
            };
            assets.push(programmer_to_asset(programmer, team));
        }

        Ok(assets)
    }
}
