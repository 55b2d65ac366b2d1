//! Domain primitives, ports and services.
//!
//! Purpose: define the user model and the use-case boundary independently of
//! HTTP and persistence frameworks. Inbound adapters call [`ports::UserService`];
//! outbound adapters implement [`ports::UserRepository`].
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic error payload.
//! - `User`, `UserId`, `UserName`, `UserListing`: the user model.
//! - `UserServiceImpl`: delegating service over a repository.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserListing, UserName, UserValidationError};
pub use self::user_service::UserServiceImpl;
