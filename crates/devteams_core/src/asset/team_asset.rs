//! Team asset and its mapping functions.

use super::{format_date_time, parse_date_time, MappingError};
use crate::model::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAsset {
    #[serde(default)]
    pub team_id: Option<TeamId>,
    pub name: String,
    pub team_focus: String,
    pub last_stand_up: String,
}

/// Converts a stored team into its wire representation.
pub fn team_to_asset(team: &Team) -> TeamAsset {
    TeamAsset {
        team_id: team.id,
        name: team.name.clone(),
        team_focus: team.team_focus.clone(),
        last_stand_up: format_date_time(&team.last_stand_up),
    }
}

/// Converts a wire team into an entity ready for saving.
///
/// The programmer collection starts empty; membership is owned by storage.
///
/// # Errors
/// - `MappingError::InvalidDateTime` when `lastStandUp` is not ISO-8601.
pub fn asset_to_team(asset: &TeamAsset) -> Result<Team, MappingError> {
    let last_stand_up =
        parse_date_time(&asset.last_stand_up).ok_or_else(|| MappingError::InvalidDateTime {
            field: "lastStandUp",
            value: asset.last_stand_up.clone(),
        })?;

    Ok(Team {
        id: asset.team_id,
        name: asset.name.clone(),
        team_focus: asset.team_focus.clone(),
        last_stand_up,
        programmers: Vec::new(),
    })
}
