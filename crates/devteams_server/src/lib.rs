//! HTTP surface for the devteams API.
//!
//! # Responsibility
//! - Route requests to the core services and translate their results.
//! - Attach HAL hypermedia links to every returned asset and collection.
//!
//! # Invariants
//! - Handlers never touch SQLite on the async executor.
//! - Errors always leave as a JSON `{code, message}` body.

pub mod config;
pub mod error;
pub mod hal;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use hal::{HalCollection, HalResource, LinkBuilder, Links};
pub use state::AppState;

/// Builds the application router over `state`.
pub fn app(state: AppState) -> axum::Router {
    routes::router(state)
}
