//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

/// Register every route on the given service config.
///
/// Shared between the server binary and the HTTP integration tests so both
/// exercise the identical route table, including the digit-constrained id
/// segment.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::list_users)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(health::live)
        .service(health::ready);
}
