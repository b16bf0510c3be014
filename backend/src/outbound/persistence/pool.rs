//! Async connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async` and `bb8`. Handlers never see this type directly:
//! each [`crate::domain::ports::UserStore`] method checks a connection out
//! at entry and the checkout guard returns it to the pool when dropped, on
//! every exit path.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorePoolError {
    /// Failed to check a connection out of the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout {
        /// Underlying bb8 failure detail.
        message: String,
    },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// Underlying bb8 failure detail.
        message: String,
    },
}

impl StorePoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the store connection pool.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    database_url: String,
    max_connections: u32,
    connect_timeout: Duration,
}

impl PoolSettings {
    /// Create settings for the given database URL.
    ///
    /// Defaults: 10 connections, 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            connect_timeout: Duration::from_secs(30),
        }
    }

    /// Cap the number of pooled connections.
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// The configured database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Async PostgreSQL connection pool for the user store.
#[derive(Clone)]
pub struct StorePool {
    inner: Pool<AsyncPgConnection>,
}

impl StorePool {
    /// Build a pool from the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`StorePoolError::Build`] when the pool cannot be constructed
    /// (invalid URL, unreachable server).
    pub async fn new(settings: PoolSettings) -> Result<Self, StorePoolError> {
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new(settings.database_url());

        let pool = Pool::builder()
            .max_size(settings.max_connections)
            .connection_timeout(settings.connect_timeout)
            .build(manager)
            .await
            .map_err(|err| StorePoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check a connection out of the pool.
    ///
    /// # Errors
    ///
    /// Returns [`StorePoolError::Checkout`] when no connection becomes
    /// available within the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, StorePoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| StorePoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn settings_default_values() {
        let settings = PoolSettings::new("postgres://localhost/userdir");

        assert_eq!(settings.database_url(), "postgres://localhost/userdir");
        assert_eq!(settings.max_connections, 10);
        assert_eq!(settings.connect_timeout, Duration::from_secs(30));
    }

    #[rstest]
    fn settings_builder_overrides() {
        let settings = PoolSettings::new("postgres://localhost/userdir")
            .with_max_connections(2)
            .with_connect_timeout(Duration::from_secs(5));

        assert_eq!(settings.max_connections, 2);
        assert_eq!(settings.connect_timeout, Duration::from_secs(5));
    }

    #[rstest]
    fn pool_error_display_carries_detail() {
        assert!(
            StorePoolError::checkout("connection refused")
                .to_string()
                .contains("connection refused")
        );
        assert!(
            StorePoolError::build("invalid URL")
                .to_string()
                .contains("invalid URL")
        );
    }
}
