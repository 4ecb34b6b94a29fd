//! JSON body extractor with API-shaped rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use kanban_core::error::CoreError;

use crate::error::AppError;

/// Deserialized JSON request body.
///
/// Behaves like [`axum::Json`], except that a body with the wrong shape
/// (a field of the wrong type, an unparseable date) becomes a 422
/// validation error keyed by `body`, and any other rejection (bad syntax,
/// missing content type) becomes a 400 in the usual `{error, code}` form.
///
/// ```ignore
/// async fn create(
///     State(state): State<AppState>,
///     JsonBody(input): JsonBody<CreateBoard>,
/// ) -> AppResult<Json<Board>> {
///     validate_payload(&state.pool, &input, &[]).await?;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::Core(CoreError::invalid_field("body", err.body_text()))
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}
