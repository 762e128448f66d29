use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

use log_engine::LogError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Decode(serde_json::Error),

    #[error("{0}")]
    Encode(serde_json::Error),

    #[error("{0}")]
    Log(#[from] LogError),

    #[error("unexpected request method {0}")]
    UnexpectedMethod(Method),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) | ApiError::UnexpectedMethod(_) => StatusCode::BAD_REQUEST,
            ApiError::Log(LogError::OffsetNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Log(_) | ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Ошибка уходит клиенту plain text'ом с соответствующим статусом.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
