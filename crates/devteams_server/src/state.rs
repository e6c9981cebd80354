//! Shared request state.
//!
//! The SQLite connection is the only shared resource. Work against it runs
//! on the blocking pool while holding the connection mutex.

use crate::error::ApiError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
    public_url: Option<String>,
}

impl AppState {
    /// Wraps a migrated connection; `public_url` overrides link bases.
    pub fn new(conn: Connection, public_url: Option<String>) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            public_url,
        }
    }

    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }

    /// Runs `work` with exclusive access to the connection.
    pub async fn with_db<F, R>(&self, work: F) -> Result<R, ApiError>
    where
        F: FnOnce(&Connection) -> Result<R, ApiError> + Send + 'static,
        R: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let conn = db
                .lock()
                .map_err(|_| ApiError::Internal("database connection lock poisoned".to_string()))?;
            work(&*conn)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("database task failed: {err}")))?
    }
}
