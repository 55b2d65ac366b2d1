//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` so they depend only on the
//! `UserService` port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserService>,
}

impl HttpState {
    /// Construct state from the user service port.
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}
