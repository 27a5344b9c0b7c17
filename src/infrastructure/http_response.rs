// HTTP error responses
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// The Insight API failed; the error chain is reported as-is
    pub fn upstream(err: &anyhow::Error) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, format!("{:#}", err))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_includes_context_chain() {
        let err = anyhow::anyhow!("connection refused").context("Failed to fetch result for insight x");
        let api_error = ApiError::upstream(&err);

        assert_eq!(api_error.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            api_error.message,
            "Failed to fetch result for insight x: connection refused"
        );
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::not_found("no chart").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
