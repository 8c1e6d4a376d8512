//! JSON body extractor with the registry's rejection mapping.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor that turns every rejection into `MalformedBody`.
///
/// The stock `Json` extractor answers undecodable bodies with a mix of
/// statuses and its own messages (422 for type errors, 400 for syntax);
/// the wire contract here is a single 400 `Invalid input` for anything
/// that fails to decode.
///
/// # Example
///
/// ```rust,ignore
/// use user_registry::api::extractors::JsonBody;
/// use user_registry::domain::NewUser;
///
/// async fn create_user(JsonBody(candidate): JsonBody<NewUser>) {
///     // candidate decoded, or the request already failed with 400
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::MalformedBody)?;

        Ok(JsonBody(value))
    }
}
