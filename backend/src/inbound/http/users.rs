//! User CRUD handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users        {"name":"alice"}
//! PUT    /users/{id}   {"name":"alice"}
//! DELETE /users/{id}
//! ```
//!
//! Validation, not-found and conflict decisions are made here; the service
//! only answers with listings, options and booleans. Non-positive ids are
//! treated as unknown users and never reach the service; ids that are not
//! integers are rejected as invalid requests.

use actix_web::error::PathError;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Error, User, UserId, UserListing};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ID, invalid_id_error, parse_user_name};

/// Body returned by `GET /users` when the store holds no users.
pub const EMPTY_LIST_MESSAGE: &str = "Users not found";

/// Request body for create and update.
///
/// `id` is accepted for symmetry with [`UserBody`] but ignored; the store
/// assigns identifiers and the path names the target.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserPayload {
    /// Read-only; ignored on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(read_only)]
    pub id: Option<i64>,
    /// Required, non-blank user name.
    #[serde(default)]
    #[schema(example = "alice")]
    pub name: Option<String>,
}

/// User representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserBody {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "alice")]
    pub name: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        let (id, name) = user.into_parts();
        Self {
            id: id.get(),
            name: name.into(),
        }
    }
}

/// Informational body for an empty listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ListMessage {
    #[schema(example = "Users not found")]
    pub message: String,
}

/// JSON extractor settings for user payloads.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Path extractor settings: a non-integer id is a malformed request.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        debug!(error = %err, "rejected user path");
        invalid_id_error(ID).into()
    })
}

fn user_not_found(raw: i64) -> Error {
    Error::not_found(format!("User {raw} not found."))
}

fn resolve_id(raw: i64) -> Result<UserId, Error> {
    UserId::try_from(raw).map_err(|_| user_not_found(raw))
}

/// List every user.
///
/// An empty store answers 200 with `{"message": "Users not found"}` rather
/// than an empty array.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users ordered by id, or an informational message when empty", body = [UserBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    match state.users.list_users().await? {
        UserListing::Found(users) => {
            let body: Vec<UserBody> = users.into_iter().map(UserBody::from).collect();
            Ok(HttpResponse::Ok().json(body))
        }
        UserListing::Empty => Ok(HttpResponse::Ok().json(ListMessage {
            message: EMPTY_LIST_MESSAGE.to_owned(),
        })),
    }
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserBody>> {
    let raw = path.into_inner();
    let id = resolve_id(raw)?;
    let user = state
        .users
        .get_user(id)
        .await?
        .ok_or_else(|| user_not_found(raw))?;
    Ok(web::Json(user.into()))
}

/// Create a user; names must be unique ignoring case.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserBody,
            headers(("Location" = String, description = "URI of the new user"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Name already taken", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let name = parse_user_name(payload.into_inner().name)?;
    if state.users.user_exists(&name).await? {
        return Err(Error::conflict(format!("User '{name}' already exists.")));
    }

    let user = state.users.create_user(&name).await?;
    info!(user_id = user.id().get(), "user created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/users/{}", user.id())))
        .json(UserBody::from(user)))
}

/// Rename a user; the body is the boolean result.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Update outcome", body = bool),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<bool>> {
    let name = parse_user_name(payload.into_inner().name)?;
    let raw = path.into_inner();
    let id = resolve_id(raw)?;
    if state.users.get_user(id).await?.is_none() {
        return Err(user_not_found(raw));
    }

    let updated = state.users.update_user(id, &name).await?;
    Ok(web::Json(updated))
}

/// Delete a user; the body is the boolean result.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Delete outcome", body = bool),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<bool>> {
    let raw = path.into_inner();
    let id = resolve_id(raw)?;
    if state.users.get_user(id).await?.is_none() {
        return Err(user_not_found(raw));
    }

    let deleted = state.users.delete_user(id).await?;
    if deleted {
        info!(user_id = raw, "user deleted");
    }
    Ok(web::Json(deleted))
}
