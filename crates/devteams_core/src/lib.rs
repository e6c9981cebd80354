//! Core domain logic for the devteams API.
//! Entities, persistence gateway, asset mapping and use-case services.

pub mod asset;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use asset::{MappingError, ProgrammerAsset, TeamAsset};
pub use logging::{default_log_level, init_logging, logging_status, LogDestination, LoggingError};
pub use model::programmer::{Programmer, ProgrammerId};
pub use model::team::{Team, TeamId};
pub use model::ModelError;
pub use repo::programmer_repo::{ProgrammerRepository, SqliteProgrammerRepository};
pub use repo::team_repo::{SqliteTeamRepository, TeamRepository};
pub use repo::{RepoError, RepoResult};
pub use service::programmer_service::ProgrammerService;
pub use service::team_service::TeamService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
