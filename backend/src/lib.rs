//! User directory service library.
//!
//! A minimal HTTP service exposing CRUD over a single user record stored in
//! PostgreSQL. Layout follows ports-and-adapters: `domain` holds the record
//! types and the store port, `inbound::http` the actix handlers, and
//! `outbound::persistence` the Diesel adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
