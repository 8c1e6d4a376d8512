//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{NewUser, User, UserPatch};
use crate::types::MessageResponse;

/// OpenAPI documentation for the user registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry",
        version = "0.1.0",
        description = "Minimal in-memory user registry with create/read/update/delete endpoints",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(User, NewUser, UserPatch, MessageResponse)
    ),
    tags(
        (name = "Users", description = "User registry operations")
    )
)]
pub struct ApiDoc;
