//! Request handlers and router assembly.

mod health;
mod programmer;
mod team;

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use devteams_core::{
    ProgrammerService, SqliteProgrammerRepository, SqliteTeamRepository, TeamService,
};
use log::info;
use rusqlite::Connection;
use serde::Serialize;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

pub const HAL_JSON: &str = "application/hal+json";

type SqliteTeamService<'conn> =
    TeamService<SqliteTeamRepository<'conn>, SqliteProgrammerRepository<'conn>>;
type SqliteProgrammerService<'conn> =
    ProgrammerService<SqliteProgrammerRepository<'conn>, SqliteTeamRepository<'conn>>;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/team", get(team::list_teams).post(team::save_team))
        .route("/team/{team_id}", get(team::get_team))
        .route(
            "/team/{team_id}/add-programmer/{programmer_id}",
            post(team::add_programmer_to_team),
        )
        .route(
            "/programmer",
            get(programmer::list_programmers).post(programmer::save_programmer),
        )
        .route("/programmer/{programmer_id}", get(programmer::get_programmer))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

fn team_service(conn: &Connection) -> Result<SqliteTeamService<'_>, ApiError> {
    Ok(TeamService::new(
        SqliteTeamRepository::try_new(conn)?,
        SqliteProgrammerRepository::try_new(conn)?,
    ))
}

fn programmer_service(conn: &Connection) -> Result<SqliteProgrammerService<'_>, ApiError> {
    Ok(ProgrammerService::new(
        SqliteProgrammerRepository::try_new(conn)?,
        SqliteTeamRepository::try_new(conn)?,
    ))
}

/// Serializes `body` as JSON tagged `application/hal+json`.
fn hal_json<T: Serialize>(body: T) -> Response {
    (
        [(CONTENT_TYPE, HeaderValue::from_static(HAL_JSON))],
        Json(body),
    )
        .into_response()
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        "event=http_request module=api status=ok method={} path={} http_status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}
