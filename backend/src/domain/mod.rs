//! Domain primitives and ports.
//!
//! Purpose: define the strongly typed user record, the sparse input payload
//! and its merge law, the transport-agnostic error payload, and the store
//! port. Nothing here depends on actix or Diesel.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::user::{User, UserId, UserInput, UserValidationError};
