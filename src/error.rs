/// Error types for the catalog filter service
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query parameter.";

/// Errors that can occur while configuring the service or serving a request
#[derive(Debug, Error)]
pub enum AppError {
    /// A required setting is absent; fatal at startup
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    /// Network failure, timeout or non-success status from the catalog source
    #[error("Upstream catalog unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Catalog body is not valid JSON or does not match the envelope shape
    #[error("Malformed upstream payload: {0}")]
    MalformedUpstreamPayload(String),

    /// A numeric query parameter could not be parsed
    #[error("Invalid value for query parameter `{name}`: {value:?}")]
    InvalidQuery { name: String, value: String },

    /// The query string could not be decoded at all
    #[error("Malformed query string: {0}")]
    MalformedQuery(String),
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub detail: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidQuery { .. } | AppError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::InvalidQuery { .. } | AppError::MalformedQuery(_) => INVALID_QUERY_MESSAGE,
            _ => UNEXPECTED_ERROR_MESSAGE,
        };
        tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        let body = ErrorBody {
            status_code: status.as_u16(),
            message: message.to_string(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::MalformedQuery(e.body_text())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::UpstreamUnavailable(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::MalformedUpstreamPayload(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn malformed_query_renders_json_bad_request() {
        let (status, body) = render(AppError::MalformedQuery("bad escape".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], INVALID_QUERY_MESSAGE);
        assert_eq!(body["detail"], "Malformed query string: bad escape");
    }

    #[tokio::test]
    async fn upstream_failure_renders_generic_message_with_detail() {
        let (status, body) = render(AppError::UpstreamUnavailable("refused".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["message"], UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(body["detail"], "Upstream catalog unavailable: refused");
    }
}
