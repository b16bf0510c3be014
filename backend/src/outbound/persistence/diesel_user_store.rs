//! PostgreSQL-backed `UserStore` implementation using Diesel.
//!
//! A thin adapter: translates between Diesel rows and domain types and maps
//! driver failures onto [`UserStoreError`]. No business logic lives here.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{User, UserId, UserInput};

use super::models::{NewUserRow, UserRow};
use super::pool::{StorePool, StorePoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserStore`] port.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: StorePool,
}

impl DieselUserStore {
    /// Create a store adapter backed by the given connection pool.
    pub fn new(pool: StorePool) -> Self {
        Self { pool }
    }
}

/// Named read-path predicate excluding soft-deleted rows.
fn not_soft_deleted() -> diesel::dsl::IsNull<users::deleted_at> {
    users::deleted_at.is_null()
}

/// Map pool errors to store port errors.
fn map_pool_error(error: StorePoolError) -> UserStoreError {
    match error {
        StorePoolError::Checkout { message } | StorePoolError::Build { message } => {
            UserStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to store port errors.
fn map_diesel_error(error: diesel::result::Error) -> UserStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            UserStoreError::duplicate_email(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserStoreError::connection("database connection closed")
        }
        DieselError::NotFound => UserStoreError::query("record not found"),
        _ => UserStoreError::query("database error"),
    }
}

/// Convert a database row to a domain user.
fn row_to_user(row: UserRow) -> Result<User, UserStoreError> {
    let id = UserId::new(row.id)
        .map_err(|err| UserStoreError::query(format!("invalid stored user id: {err}")))?;
    Ok(User::new(
        id,
        row.name,
        row.email,
        row.created_at,
        row.updated_at,
        row.deleted_at,
    ))
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn list_active(&self) -> Result<Vec<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .filter(not_soft_deleted())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_active(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_i64()))
            .filter(not_soft_deleted())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn insert(&self, input: &UserInput) -> Result<User, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            name: input.name.as_str(),
            email: input.email.as_str(),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(row)
    }

    async fn update(&self, user: &User) -> Result<User, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = diesel::update(
            users::table
                .filter(users::id.eq(user.id().as_i64()))
                .filter(not_soft_deleted()),
        )
        .set((
            users::name.eq(user.name()),
            users::email.eq(user.email()),
            users::updated_at.eq(diesel::dsl::now),
        ))
        .returning(UserRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

        match row {
            Some(row) => row_to_user(row),
            // The row vanished between the caller's existence check and this
            // statement; the outcome of that race belongs to the store.
            None => Err(UserStoreError::query("user row missing during update")),
        }
    }

    async fn soft_delete(&self, id: UserId) -> Result<(), UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(
            users::table
                .filter(users::id.eq(id.as_i64()))
                .filter(not_soft_deleted()),
        )
        .set(users::deleted_at.eq(diesel::dsl::now))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        if affected == 0 {
            debug!(user_id = %id, "soft delete matched no active row");
        }
        Ok(())
    }
}
