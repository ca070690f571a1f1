//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server rejected the payload (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input rejected locally before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] shared::AppError),

    /// API error body (`{ code, message, details }`)
    #[error("API error {code}: {message}")]
    Api {
        code: i32,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Another reorder of the same course has not finished yet
    #[error("A reorder is already in flight for course {0}")]
    ReorderInFlight(i64),
}

impl ClientError {
    /// Errors the user can recover from by re-fetching and trying again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::Api { .. }
                | Self::Internal(_)
                | Self::NotFound(_)
                | Self::Validation(_)
                | Self::InvalidResponse(_)
                | Self::ReorderInFlight(_)
        )
    }
}

/// 服务端返回的错误响应格式
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ClientError {
    /// Map a non-success response to an error; API error bodies win over the status
    pub(crate) fn from_status(status: http::StatusCode, text: String) -> Self {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
            return Self::Api {
                code: api_err.code,
                message: api_err.message,
                details: api_err.details,
            };
        }
        match status {
            http::StatusCode::UNAUTHORIZED => Self::Unauthorized,
            http::StatusCode::FORBIDDEN => Self::Forbidden(text),
            http::StatusCode::NOT_FOUND => Self::NotFound(text),
            http::StatusCode::BAD_REQUEST | http::StatusCode::UNPROCESSABLE_ENTITY => {
                Self::Validation(text)
            }
            _ => Self::Internal(text),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_api_error_body_wins() {
        let body = r#"{"code":4001,"message":"stale order","details":{"id":3}}"#;
        match ClientError::from_status(StatusCode::CONFLICT, body.into()) {
            ClientError::Api { code, message, details } => {
                assert_eq!(code, 4001);
                assert_eq!(message, "stale order");
                assert_eq!(details.unwrap()["id"], 3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_status_fallback() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "gone".into()),
            ClientError::NotFound(t) if t == "gone"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "{}".into()),
            ClientError::Validation(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, "<html>".into()),
            ClientError::Internal(_)
        ));
    }

    #[test]
    fn test_recoverable() {
        assert!(ClientError::Internal("boom".into()).is_recoverable());
        assert!(ClientError::ReorderInFlight(1).is_recoverable());
        assert!(!ClientError::Unauthorized.is_recoverable());
        assert!(!ClientError::InvalidInput(shared::AppError::validation("x")).is_recoverable());
    }
}
