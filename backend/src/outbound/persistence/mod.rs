//! PostgreSQL persistence adapter using Diesel.
//!
//! Concrete implementation of the domain's `UserStore` port backed by
//! PostgreSQL via Diesel, with async support through `diesel-async` and
//! `bb8` connection pooling.
//!
//! Principles:
//!
//! - **Thin adapter**: translate between Diesel rows and domain types only.
//! - **Internal models**: row structs (`models`) and table definitions
//!   (`schema`) never leave this module.
//! - **Typed errors**: every driver failure is mapped to a
//!   [`crate::domain::ports::UserStoreError`] variant.

mod diesel_user_store;
mod migrate;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use migrate::run_migrations;
pub use pool::{PoolSettings, StorePool, StorePoolError};
