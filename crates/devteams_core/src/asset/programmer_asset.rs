//! Programmer asset and its mapping functions.

use super::{MappingError, DATE_FORMAT};
use crate::model::programmer::{Programmer, ProgrammerId};
use crate::model::team::{Team, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammerAsset {
    #[serde(default)]
    pub programmer_id: Option<ProgrammerId>,
    pub name: String,
    pub date_hired: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

/// Converts a stored programmer into its wire representation.
///
/// `team` is the resolved owner of `programmer.team_id`, if any; its id and
/// name are copied onto the asset.
pub fn programmer_to_asset(programmer: &Programmer, team: Option<&Team>) -> ProgrammerAsset {
    ProgrammerAsset {
        programmer_id: programmer.id,
        name: programmer.name.clone(),
        date_hired: programmer.date_hired.format(DATE_FORMAT).to_string(),
        team_id: team.and_then(|team| team.id),
        team_name: team.map(|team| team.name.clone()),
    }
}

/// Converts a wire programmer into an entity ready for saving.
///
/// `teamId` and `teamName` are ignored: team membership changes only by
/// adding the programmer to a team.
///
/// # Errors
/// - `MappingError::InvalidDate` when `dateHired` is not ISO-8601.
pub fn asset_to_programmer(asset: &ProgrammerAsset) -> Result<Programmer, MappingError> {
    let date_hired = NaiveDate::parse_from_str(&asset.date_hired, DATE_FORMAT).map_err(|_| {
        MappingError::InvalidDate {
            field: "dateHired",
            value: asset.date_hired.clone(),
        }
    })?;

    Ok(Programmer {
        id: asset.programmer_id,
        name: asset.name.clone(),
        date_hired,
        team_id: None,
    })
}

#[cfg(test)]
mod tests {
    use super::{asset_to_programmer, programmer_to_asset, ProgrammerAsset};
    use crate::asset::MappingError;
    use crate::model::programmer::Programmer;
    use crate::model::team::Team;
    use chrono::NaiveDate;

    fn asset(date_hired: &str) -> ProgrammerAsset {
        ProgrammerAsset {
            programmer_id: Some(9),
            name: "grace".to_string(),
            date_hired: date_hired.to_string(),
            team_id: None,
            team_name: None,
        }
    }

    #[test]
    fn round_trip_preserves_name_and_date() {
        let input = asset("2017-03-14");
        let programmer = asset_to_programmer(&input).expect("valid date should map");
        assert_eq!(programmer_to_asset(&programmer, None), input);
    }

    #[test]
    fn team_fields_are_ignored_on_input() {
        let mut input = asset("2017-03-14");
        input.team_id = Some(3);
        input.team_name = Some("Core".to_string());
        let programmer = asset_to_programmer(&input).expect("valid date should map");
        assert_eq!(programmer.team_id, None);
    }

    #[test]
    fn parent_team_is_denormalized() {
        let mut team = Team::new(
            "Core",
            "Rust",
            NaiveDate::from_ymd_opt(2001, 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .expect("valid timestamp"),
        );
        team.id = Some(3);
        let mut programmer =
            Programmer::new("grace", NaiveDate::from_ymd_opt(2017, 3, 14).expect("valid date"));
        programmer.team_id = Some(3);

        let asset = programmer_to_asset(&programmer, Some(&team));
        assert_eq!(asset.team_id, Some(3));
        assert_eq!(asset.team_name.as_deref(), Some("Core"));
    }

    #[test]
    fn absent_team_fields_are_omitted() {
        let json = serde_json::to_value(asset("2017-03-14")).expect("asset should serialize");
        let object = json.as_object().expect("asset should be an object");
        assert!(!object.contains_key("teamId"));
        assert!(!object.contains_key("teamName"));
        assert_eq!(object["dateHired"], "2017-03-14");
    }

    #[test]
    fn rejects_non_iso_date() {
        let err = asset_to_programmer(&asset("14/03/2017")).expect_err("malformed date must fail");
        assert_eq!(
            err,
            MappingError::InvalidDate {
                field: "dateHired",
                value: "14/03/2017".to_string(),
            }
        );
    }
}
