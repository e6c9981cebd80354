//! `/programmer` handlers.

use super::{hal_json, programmer_service};
use crate::error::ApiError;
use crate::hal::LinkBuilder;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Json;
use devteams_core::{ProgrammerAsset, ProgrammerId, TeamId};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammerFilter {
    pub team_id: Option<TeamId>,
}

pub async fn list_programmers(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ProgrammerFilter>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(filter) = query?;
    let team_filter = filter.team_id;
    let programmers = state
        .with_db(move |conn| Ok(programmer_service(conn)?.list_programmers(team_filter)?))
        .await?;

    let links = LinkBuilder::for_request(state.public_url(), &headers);
    Ok(hal_json(links.programmer_collection(programmers, team_filter)))
}

pub async fn get_programmer(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<ProgrammerId>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(programmer_id) = path?;
    let programmer = state
        .with_db(move |conn| Ok(programmer_service(conn)?.find_programmer(programmer_id)?))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("programmer not found: {programmer_id}")))?;

    let links = LinkBuilder::for_request(state.public_url(), &headers);
    Ok(hal_json(links.programmer(programmer)))
}

pub async fn save_programmer(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ProgrammerAsset>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(asset) = body?;
    let saved = state
        .with_db(move |conn| Ok(programmer_service(conn)?.save_programmer(&asset)?))
        .await?;

    let links = LinkBuilder::for_request(state.public_url(), &headers);
    Ok(hal_json(links.programmer(saved)))
}
