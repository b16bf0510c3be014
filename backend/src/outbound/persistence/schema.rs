//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// User records table.
    ///
    /// `deleted_at` is null while the record is active; a non-null value
    /// marks it soft-deleted and excludes it from normal reads.
    users (id) {
        /// Primary key, assigned by the store (`BIGSERIAL`).
        id -> Int8,
        /// Display name, bounded by the column width.
        #[max_length = 64]
        name -> Varchar,
        /// Contact email; carries a unique constraint.
        #[max_length = 100]
        email -> Varchar,
        /// Record creation timestamp (store default).
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
        /// Soft-deletion marker.
        deleted_at -> Nullable<Timestamptz>,
    }
}
