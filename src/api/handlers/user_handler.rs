//! User CRUD handlers.
//!
//! Each handler does the HTTP-shaped work (path parsing, body decoding,
//! status mapping) and delegates every business rule to the registry.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{NewUser, User, UserPatch};
use crate::errors::{AppError, AppResult};
use crate::types::MessageResponse;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/get", get(list_users).fallback(method_not_allowed))
        .route("/add", post(create_user).fallback(method_not_allowed))
        .route("/put/:id", put(update_user).fallback(method_not_allowed))
        .route("/delete/:id", delete(delete_user).fallback(method_not_allowed))
}

/// Answer for a known path hit with the wrong verb. Replaces the
/// framework's empty 405 with the registry's plain-text message.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Parse the trailing path segment as a user identifier.
fn parse_user_id(segment: &str) -> AppResult<u64> {
    segment.parse().map_err(|_| AppError::InvalidIdentifier)
}

/// List all users
#[utoipa::path(
    get,
    path = "/users/get",
    tag = "Users",
    responses(
        (status = 200, description = "All records in insertion order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.registry.list().await)
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users/add",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Undecodable body, missing fields, or invalid email"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(candidate): JsonBody<NewUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.registry.create(candidate).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update an existing user
///
/// Invoked as PUT but merges rather than replaces: only non-empty body
/// fields are applied.
#[utoipa::path(
    put,
    path = "/users/put/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User identifier")
    ),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Non-integer identifier, undecodable body, or invalid email"),
        (status = 404, description = "No user with this identifier"),
        (status = 409, description = "Username or email already taken by another user")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> AppResult<Json<User>> {
    let id = parse_user_id(&id)?;

    // The identifier must resolve before the body is inspected: an
    // undecodable body sent to an unknown id is a 404, not a 400.
    if state.registry.find_by_id(id).await.is_none() {
        return Err(AppError::NotFound);
    }

    let Json(patch) = body.map_err(|_| AppError::MalformedBody)?;
    let user = state.registry.update(id, patch).await?;

    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/delete/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Non-integer identifier"),
        (status = 404, description = "No user with this identifier")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_user_id(&id)?;
    state.registry.delete(id).await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
