//! Port abstraction for the user store and its errors.
//!
//! Handlers depend on this trait only; the Diesel adapter in
//! `outbound::persistence` and the in-memory double used by tests are both
//! implementations of the same contract.

use async_trait::async_trait;

use crate::domain::{User, UserId, UserInput};

/// Failures raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// A store connection could not be established or was lost.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Driver-provided failure detail.
        message: String,
    },

    /// An insert or update violated the email uniqueness constraint.
    #[error("email is already registered: {message}")]
    DuplicateEmail {
        /// Constraint violation detail from the store.
        message: String,
    },

    /// A query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Driver-provided failure detail.
        message: String,
    },
}

impl UserStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a duplicate-email error with the given message.
    pub fn duplicate_email(message: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Durable storage for user records.
///
/// Every method acquires its own store connection at entry and releases it on
/// every exit path; implementations hold no request-scoped state. All read
/// methods exclude soft-deleted records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch all active users in store-default order.
    async fn list_active(&self) -> Result<Vec<User>, UserStoreError>;

    /// Fetch an active user by identifier; `None` when no active record
    /// carries the id.
    async fn find_active(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Insert a new user from the given input. The store assigns the
    /// identifier and both timestamps.
    async fn insert(&self, input: &UserInput) -> Result<User, UserStoreError>;

    /// Persist the editable fields of an already-merged record and refresh
    /// its `updated_at`. Returns the stored state.
    async fn update(&self, user: &User) -> Result<User, UserStoreError>;

    /// Mark the record soft-deleted. Missing or already-deleted rows are a
    /// no-op; callers check existence first.
    async fn soft_delete(&self, id: UserId) -> Result<(), UserStoreError>;
}
