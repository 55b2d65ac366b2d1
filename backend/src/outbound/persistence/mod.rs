//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the [`DieselUserRepository`] implementation of the
//! `UserRepository` port, backed by `diesel-async` and a `bb8` pool.
//!
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module; only domain types cross the boundary.
//! - Database failures are mapped to `UserPersistenceError` before leaving
//!   the adapter.
//!
//! # Example
//!
//! ```no_run
//! use user_service::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
