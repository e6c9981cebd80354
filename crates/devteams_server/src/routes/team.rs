//! `/team` handlers.

use super::{hal_json, team_service};
use crate::error::ApiError;
use crate::hal::LinkBuilder;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Json;
use devteams_core::{ProgrammerId, TeamAsset, TeamId};

pub async fn list_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let teams = state
        .with_db(|conn| Ok(team_service(conn)?.list_teams()?))
        .await?;

    let links = LinkBuilder::for_request(state.public_url(), &headers);
    Ok(hal_json(links.team_collection(teams)))
}

pub async fn get_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<TeamId>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(team_id) = path?;
    let team = state
        .with_db(move |conn| Ok(team_service(conn)?.find_team(team_id)?))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("team not found: {team_id}")))?;

    let links = LinkBuilder::for_request(state.public_url(), &headers);
    Ok(hal_json(links.team(team)))
}

pub async fn save_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<TeamAsset>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(asset) = body?;
    let saved = state
        .with_db(move |conn| Ok(team_service(conn)?.save_team(&asset)?))
        .await?;

    let links = LinkBuilder::for_request(state.public_url(), &headers);
    Ok(hal_json(links.team(saved)))
}

pub async fn add_programmer_to_team(
    State(state): State<AppState>,
    path: Result<Path<(TeamId, ProgrammerId)>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path((team_id, programmer_id)) = path?;
    state
        .with_db(move |conn| {
            Ok(team_service(conn)?.add_programmer_to_team(team_id, programmer_id)?)
        })
        .await?;
    Ok(StatusCode::OK)
}
