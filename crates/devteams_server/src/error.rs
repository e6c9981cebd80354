//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"code": "...", "message": "..."}`.
//! Clients match on `code`; messages may be reworded.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use devteams_core::{RepoError, ServiceError};
use log::{error, warn};
use thiserror::Error;

pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Identifier does not resolve. HTTP 404.
    #[error("{0}")]
    NotFound(String),
    /// Body, path or query could not be decoded. HTTP 400.
    #[error("{0}")]
    MalformedInput(String),
    /// Storage backend failure. HTTP 500.
    #[error("{0}")]
    Storage(String),
    /// Unexpected internal error. HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => error_code::NOT_FOUND,
            Self::MalformedInput(_) => error_code::MALFORMED_INPUT,
            Self::Storage(_) => error_code::STORAGE_ERROR,
            Self::Internal(_) => error_code::INTERNAL,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::TeamNotFound(_) | ServiceError::ProgrammerNotFound(_) => {
                Self::NotFound(value.to_string())
            }
            ServiceError::Mapping(err) => Self::MalformedInput(err.to_string()),
            ServiceError::Repo(err) => err.into(),
            ServiceError::Model(err) => Self::Internal(err.to_string()),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::MalformedInput(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::MalformedInput(value.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        Self::MalformedInput(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                "event=api_error module=api status=error code={} error={}",
                self.error_code(),
                self
            );
        } else {
            warn!(
                "event=api_error module=api status=rejected code={} error={}",
                self.error_code(),
                self
            );
        }

        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use devteams_core::{MappingError, RepoError, ServiceError};

    #[test]
    fn service_errors_map_to_status_codes() {
        let not_found: ApiError = ServiceError::TeamNotFound(4).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "team not found: 4");

        let malformed: ApiError = ServiceError::Mapping(MappingError::InvalidDate {
            field: "dateHired",
            value: "soon".to_string(),
        })
        .into();
        assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(malformed.error_code(), "MALFORMED_INPUT");

        let storage: ApiError =
            ServiceError::Repo(RepoError::MissingRequiredTable("teams")).into();
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.error_code(), "STORAGE_ERROR");
    }
}
