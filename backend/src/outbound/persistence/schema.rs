//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` when the migrations change.

diesel::table! {
    /// User records. `id` is assigned by the `BIGSERIAL` sequence.
    users (id) {
        /// Primary key assigned on insert.
        id -> Int8,
        /// Required user name; uniqueness is checked by the service, not here.
        name -> Varchar,
    }
}
