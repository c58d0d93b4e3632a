//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::SessionGuard;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and the session guard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    sessions: SessionGuard,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The session guard inherits the configured signing secret and only
    /// marks cookies `Secure` in production deployments.
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        let sessions = SessionGuard::new(config.session_secret.clone(), config.is_production());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                sessions,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the admin session guard.
    #[must_use]
    pub fn sessions(&self) -> &SessionGuard {
        &self.inner.sessions
    }
}
