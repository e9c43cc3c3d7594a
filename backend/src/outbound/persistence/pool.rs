//! Async connection pool for the PostgreSQL document store.
//!
//! Wraps `diesel-async` and `bb8`. Building the pool opens the idle
//! connection up front, so an unreachable server is reported at startup
//! rather than on the first request.

use std::fmt;
use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_MIN_IDLE: u32 = 1;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which pool operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolStage {
    /// Creating the pool and its idle connections.
    Build,
    /// Borrowing a connection for a statement.
    Checkout,
}

impl fmt::Display for PoolStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Build => "build",
            Self::Checkout => "checkout",
        })
    }
}

/// A pool operation failed; the store should be treated as unreachable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("connection pool {stage} failed: {message}")]
pub struct PoolError {
    stage: PoolStage,
    message: String,
}

impl PoolError {
    fn new(stage: PoolStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }

    /// A connection could not be borrowed in time.
    #[must_use]
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::new(PoolStage::Checkout, message)
    }

    /// Operation that failed.
    #[must_use]
    pub const fn stage(&self) -> PoolStage {
        self.stage
    }

    /// Driver message without the pool prefix.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Connection target plus pool sizing.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Ten connections with a ten second checkout timeout.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Cap the number of open connections; at least one is always allowed.
    #[must_use]
    pub const fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = if max_size == 0 { 1 } else { max_size };
        self
    }

    /// Bound how long a request waits for a free connection.
    #[must_use]
    pub const fn with_checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }

    /// Connection string.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Async connection pool for PostgreSQL via Diesel.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool and open its idle connection.
    ///
    /// # Errors
    ///
    /// Returns a [`PoolStage::Build`] error when the URL is invalid or the
    /// server refuses connections.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(Some(DEFAULT_MIN_IDLE.min(config.max_size)))
            .connection_timeout(config.checkout_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::new(PoolStage::Build, err.to_string()))?;
        Ok(Self { inner })
    }

    /// Borrow a connection.
    ///
    /// # Errors
    ///
    /// Returns a [`PoolStage::Checkout`] error when no connection frees up
    /// within the checkout timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
