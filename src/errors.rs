use axum::{extract::rejection::FormRejection, http::StatusCode, Json};
use serde_json::json;

/// Failures raised by the store and the aggregation layer.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UsageError {
    #[error("{0}")]
    Validation(String),
    #[error("data error: {0}")]
    Data(String),
}

impl UsageError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::Data(message.into())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<UsageError> for AppError {
    fn from(err: UsageError) -> Self {
        match err {
            UsageError::Validation(message) => Self::bad_request(message),
            err @ UsageError::Data(_) => Self::internal(err),
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = json!({ "status": "error", "message": self.message });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err: AppError = UsageError::validation("date is required").into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "date is required");
    }

    #[test]
    fn data_maps_to_internal() {
        let err: AppError = UsageError::data("csv writer closed").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "data error: csv writer closed");
    }
}
