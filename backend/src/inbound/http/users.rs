//! User CRUD HTTP handlers.
//!
//! ```text
//! GET    /users        list active users
//! POST   /users        create a user
//! PATCH  /users/{id}   partially update a user
//! DELETE /users/{id}   soft-delete a user
//! ```
//!
//! Request bodies are decoded by hand from the raw bytes rather than through
//! an extractor: Update must check record existence before looking at the
//! body, and decode failures must surface the serde error text verbatim.

use actix_web::{delete, get, patch, post, web};
use tracing::error;

use crate::domain::ports::UserStoreError;
use crate::domain::{Error, User, UserId, UserInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Confirmation body returned by a successful delete.
const DELETED_MESSAGE: &str = "User deleted successfully!";

/// Fixed message for mutations against an unknown or soft-deleted id.
const UNKNOWN_USER_MESSAGE: &str = "User with this id does not exist.";

fn unknown_user_error() -> Error {
    Error::invalid_request(UNKNOWN_USER_MESSAGE)
}

/// Decode a request body as [`UserInput`], surfacing the serde failure text.
fn decode_user_input(body: &[u8]) -> Result<UserInput, Error> {
    serde_json::from_slice(body).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Translate a path identifier into a [`UserId`].
///
/// The route pattern admits only digit runs, so the single invalid case is
/// zero, which no record can carry; report it as unknown.
fn parse_user_id(raw: i64) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| unknown_user_error())
}

/// Map store failures onto the client-facing error policy: duplicate email
/// is a conflict, an unreachable store is service-unavailable, anything else
/// is internal (and redacted at the HTTP edge).
fn map_store_error(err: UserStoreError) -> Error {
    match err {
        UserStoreError::Connection { message } => {
            error!(%message, "user store unreachable");
            Error::service_unavailable("user store unavailable")
        }
        UserStoreError::DuplicateEmail { .. } => {
            Error::conflict("A user with this email already exists.")
        }
        UserStoreError::Query { message } => Error::internal(message),
    }
}

/// List all active users.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All active users", body = [User]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "User store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_active().await.map_err(map_store_error)?;
    Ok(web::Json(users))
}

/// Create a user from the request body.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserInput,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Malformed request body", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "User store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let input = decode_user_input(&body)?;
    let created = state.users.insert(&input).await.map_err(map_store_error)?;
    Ok(web::Json(created))
}

/// Partially update a user: non-empty body fields replace stored values.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    request_body = UserInput,
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Unknown id or malformed body", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "User store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id:\\d+}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;

    // Existence is checked before the body is decoded.
    let existing = state
        .users
        .find_active(id)
        .await
        .map_err(map_store_error)?
        .ok_or_else(unknown_user_error)?;

    let input = decode_user_input(&body)?;
    let merged = existing.merged_with(&input);
    let updated = state.users.update(&merged).await.map_err(map_store_error)?;
    Ok(web::Json(updated))
}

/// Soft-delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deletion confirmation", body = String),
        (status = 400, description = "Unknown id", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "User store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id:\\d+}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<&'static str>> {
    let id = parse_user_id(path.into_inner())?;

    let existing = state.users.find_active(id).await.map_err(map_store_error)?;
    if existing.is_none() {
        return Err(unknown_user_error());
    }

    state.users.soft_delete(id).await.map_err(map_store_error)?;
    Ok(web::Json(DELETED_MESSAGE))
}
