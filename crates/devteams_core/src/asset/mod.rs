//! Wire-format assets and entity/asset mapping.
//!
//! # Responsibility
//! - Define the JSON shapes exchanged with API callers.
//! - Convert between assets and persisted entities, including date
//!   formatting and parsing.
//!
//! # Invariants
//! - Mapping is pure and deterministic; the only failure is a date string
//!   that does not match the fixed ISO-8601 format.
//! - Optional programmer fields are omitted from output when absent.

pub mod programmer_asset;
pub mod team_asset;

pub use programmer_asset::{asset_to_programmer, programmer_to_asset, ProgrammerAsset};
pub use team_asset::{asset_to_team, team_to_asset, TeamAsset};

use chrono::NaiveDateTime;
use thiserror::Error;

/// ISO-8601 local date-time. Fractional seconds are optional on input.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// ISO-8601 local date-time at minute precision.
pub const DATE_TIME_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// ISO-8601 local date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Asset input that cannot be mapped onto an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("field `{field}` expects an ISO-8601 date-time, got `{value}`")]
    InvalidDateTime { field: &'static str, value: String },
    #[error("field `{field}` expects an ISO-8601 date, got `{value}`")]
    InvalidDate { field: &'static str, value: String },
}

/// Parses an ISO-8601 local date-time where seconds and fractions are optional.
pub(crate) fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATE_TIME_MINUTES_FORMAT))
        .ok()
}

/// Formats with seconds always present and the fraction written with only
/// its significant digits (`.5`, `.1234`), omitted when zero.
pub(crate) fn format_date_time(value: &NaiveDateTime) -> String {
    let formatted = value.format("%Y-%m-%dT%H:%M:%S%.9f").to_string();
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
