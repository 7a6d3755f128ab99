use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use shyft_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ApiErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::InternalServerError => ApiError::InternalServerError(error.to_string()),
        }
    }
}

/// JSON extractor that runs the payload's `validator` rules before the
/// handler sees it.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        payload
            .validate()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(ValidateJson(payload))
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::post;
    use tower::util::ServiceExt;

    use super::*;
    use crate::application::http::schedule::validators::CreateScheduleValidator;

    async fn accept(ValidateJson(_): ValidateJson<CreateScheduleValidator>) -> StatusCode {
        StatusCode::OK
    }

    fn app() -> Router {
        Router::new().route("/schedules", post(accept))
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/schedules")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_payload_reaches_the_handler() {
        let body = r#"{
            "alias": "night-shift",
            "start_date": "2024-01-01T00:00:00Z",
            "end_date": "2024-12-31T00:00:00Z",
            "year": 2024
        }"#;
        let response = app().oneshot(json_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn validation_failure_is_unprocessable_entity() {
        let body = r#"{
            "alias": "",
            "start_date": "2024-01-01T00:00:00Z",
            "end_date": "2024-12-31T00:00:00Z",
            "year": 2024
        }"#;
        let response = app().oneshot(json_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let response = app().oneshot(json_request("not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
