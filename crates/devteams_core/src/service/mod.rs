//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Speak assets to callers and entities to repositories.
//!
//! # See also
//! - [`crate::asset`] for the mapping rules.

pub mod programmer_service;
pub mod team_service;

use crate::asset::MappingError;
use crate::model::programmer::ProgrammerId;
use crate::model::team::TeamId;
use crate::model::ModelError;
use crate::repo::RepoError;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for team and programmer use-cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Target team does not exist.
    #[error("team not found: {0}")]
    TeamNotFound(TeamId),
    /// Target programmer does not exist.
    #[error("programmer not found: {0}")]
    ProgrammerNotFound(ProgrammerId),
    /// Caller input could not be mapped onto an entity.
    #[error(transparent)]
    Mapping(#[from] MappingError),
    /// Entity ownership rule violated.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// Persistence-layer failure.
    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound {
                entity: "team",
                id,
            } => Self::TeamNotFound(id),
            RepoError::NotFound {
                entity: "programmer",
                id,
            } => Self::ProgrammerNotFound(id),
            other => Self::Repo(other),
        }
    }
}
