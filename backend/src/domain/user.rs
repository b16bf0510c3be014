//! User data model.
//!
//! The user record is the sole persisted entity. Identifiers are assigned by
//! the store and are strictly positive, so "no such record" is expressed as
//! `Option::None` rather than a zero sentinel.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Store identifiers start at one; zero and negatives cannot exist.
    NonPositiveId {
        /// The rejected raw value.
        value: i64,
    },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId { value } => {
                write!(f, "user id must be a positive integer, got {value}")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned user identifier.
///
/// Serialises as a plain JSON number. Construction rejects non-positive
/// values, so a sentinel "absent" identifier cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and construct a [`UserId`] from a raw store value.
    pub fn new(raw: i64) -> Result<Self, UserValidationError> {
        if raw <= 0 {
            return Err(UserValidationError::NonPositiveId { value: raw });
        }
        Ok(Self(raw))
    }

    /// Access the raw identifier value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Transient request payload carrying the caller-editable user fields.
///
/// Fields missing from the request body deserialise as empty strings; an
/// empty field means "leave unchanged" when patching an existing record.
/// Never persisted directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInput {
    /// Free-form display name; the store bounds its length.
    pub name: String,
    /// Contact email; unique across all users, enforced by the store.
    pub email: String,
}

/// Application user.
///
/// ## Invariants
/// - `id` is assigned by the store and immutable thereafter.
/// - `email` is unique across all users (store constraint).
/// - A non-null `deleted_at` marks the record soft-deleted; read paths must
///   exclude such records via [`User::is_active`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = i64, example = 1)]
    id: UserId,
    #[schema(example = "Ann")]
    name: String,
    #[schema(example = "ann@x.com")]
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a [`User`] from store-provided parts.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Record creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Soft-deletion timestamp; `None` while the record is active.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Named soft-deletion predicate: true while the record is visible to
    /// normal reads.
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Apply a sparse input onto this record, field by field.
    ///
    /// Only non-empty input fields replace the stored value; an empty field
    /// leaves the existing value unchanged. Identifier and timestamps are
    /// never touched here (the store maintains `updated_at`).
    pub fn merged_with(&self, input: &UserInput) -> Self {
        let mut merged = self.clone();
        if !input.name.is_empty() {
            merged.name = input.name.clone();
        }
        if !input.email.is_empty() {
            merged.email = input.email.clone();
        }
        merged
    }

    /// Return a copy marked soft-deleted at the given instant.
    pub fn soft_deleted(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }
}
