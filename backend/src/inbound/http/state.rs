//! Shared HTTP adapter state.
//!
//! Handlers receive the store port through `actix_web::web::Data`, so they
//! depend on the trait alone and remain testable with an in-memory double.

use std::sync::Arc;

use crate::domain::ports::UserStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Durable storage for user records.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Construct state around a store implementation.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
