use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

/// Successful handler result, serialized as JSON.
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
    NoContent,
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Response::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}
