use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use serde::{Deserialize, Serialize};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Every failure a handler can return. Rendered as
/// `{"error": {"message": ..., "status": ...}}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Duplicate key. Reported with status 400 on the wire.
    #[error("{0}")]
    Conflict(String),
    /// Request exceeded `server.request_timeout_secs`.
    #[error("Request Timeout")]
    Timeout,
    /// Detail is logged, never sent to the client.
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody { error: ErrorDetail { message: self.public_message(), status: self.status().as_u16() } }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(detail) = &self {
            error!(error = %detail, "internal error");
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(m) => ApiError::BadRequest(m),
            ServiceError::NotFound(m) => ApiError::NotFound(m),
            ServiceError::Conflict(m) => ApiError::Conflict(m),
            ServiceError::Db(m) => ApiError::Internal(m),
            ServiceError::Model(ModelError::Validation(m)) => ApiError::BadRequest(m),
            ServiceError::Model(ModelError::Duplicate(d)) => {
                warn!(detail = %d, "unmapped unique violation");
                ApiError::Conflict("Duplicate record".into())
            }
            ServiceError::Model(ModelError::MissingReference(d)) => {
                warn!(detail = %d, "unmapped foreign key violation");
                ApiError::BadRequest("Referenced record does not exist".into())
            }
            ServiceError::Model(ModelError::NotUpdated) => ApiError::NotFound("Not Found".into()),
            ServiceError::Model(ModelError::Db(m)) => ApiError::Internal(m),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(e: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = e.into_response();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_envelope() {
        let (status, body) = render(ApiError::NotFound("No such company".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": {"message": "No such company", "status": 404}}));
    }

    #[tokio::test]
    async fn conflict_is_reported_as_bad_request() {
        let (status, body) = render(ApiError::Conflict("Company already exists".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["status"], 400);
    }

    #[tokio::test]
    async fn internal_detail_is_hidden() {
        let (status, body) = render(ApiError::Internal("connection refused to 10.0.0.5".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Internal Server Error");
        assert_eq!(body["error"]["status"], 500);
    }

    #[tokio::test]
    async fn timeout_envelope() {
        let (status, body) = render(ApiError::Timeout).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body, serde_json::json!({"error": {"message": "Request Timeout", "status": 408}}));
    }

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::no_such("invoice"), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Db("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Model(ModelError::missing_data()), StatusCode::BAD_REQUEST),
            (ServiceError::Model(ModelError::NotUpdated), StatusCode::NOT_FOUND),
            (ServiceError::Model(ModelError::Db("x".into())), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn model_validation_message_passes_through() {
        let api = ApiError::from(ServiceError::Model(ModelError::missing_data()));
        assert_eq!(api.body().error.message, "Missing required data");
    }
}
