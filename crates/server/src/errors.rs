use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Every failed request ends here and leaves as `{ message, statusCode }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// Malformed body, path or query.
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: String,
    status_code: u16,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ApiError::Service(e) => match e {
                ServiceError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
                ServiceError::BadRequest(m) | ServiceError::Conflict(m) => (StatusCode::BAD_REQUEST, m.clone()),
                ServiceError::Model(ModelError::Validation(m)) => (StatusCode::BAD_REQUEST, m.clone()),
                ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
                }
                ServiceError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred".into()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(error = %self, "request_failed");
        }
        let body = ErrorBody { message, status_code: status.as_u16() };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_statuses() {
        let cases = [
            (ApiError::from(ServiceError::not_found("Industry")), StatusCode::NOT_FOUND, "Industry not found"),
            (ApiError::from(ServiceError::Conflict("taken".into())), StatusCode::BAD_REQUEST, "taken"),
            (ApiError::from(ServiceError::Model(ModelError::required("title"))), StatusCode::BAD_REQUEST, "title is required"),
            (ApiError::from(ServiceError::Db("disk full".into())), StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
            (ApiError::from(ServiceError::BadRequest("Search query is required".into())), StatusCode::BAD_REQUEST, "Search query is required"),
            (ApiError::from(ServiceError::Upstream("timeout".into())), StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred"),
            (ApiError::BadRequest("bad id".into()), StatusCode::BAD_REQUEST, "bad id"),
        ];
        for (err, status, message) in cases {
            assert_eq!(err.status_and_message(), (status, message.to_string()));
        }
    }
}
