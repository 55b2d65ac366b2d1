//! Selection of the user store backing the HTTP state.

use std::sync::Arc;

use tracing::info;

use user_service::domain::UserServiceImpl;
use user_service::domain::ports::{UserRepository, UserService};
use user_service::inbound::http::state::HttpState;
use user_service::outbound::memory::InMemoryUserRepository;
use user_service::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Pick the PostgreSQL repository when a pool is configured, otherwise the
/// process-local store.
fn build_user_repository(config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL user store");
            Arc::new(DieselUserRepository::new(pool.clone()))
        }
        None => {
            info!("no database configured; using in-memory user store");
            Arc::new(InMemoryUserRepository::new())
        }
    }
}

/// Build the shared handler state for `config`.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let service: Arc<dyn UserService> =
        Arc::new(UserServiceImpl::new(build_user_repository(config)));
    HttpState::new(service)
}
