//! OpenAPI documentation for the user service.
//!
//! [`ApiDoc`] registers every handler in the inbound HTTP layer together
//! with the schema wrappers from `inbound::http::schemas`. Swagger UI serves
//! it at `/docs` in debug builds and the `openapi-dump` binary prints it.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{ListMessage, UserBody, UserPayload};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "Create, read, update and delete users, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserBody, UserPayload, ListMessage, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "User CRUD operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
