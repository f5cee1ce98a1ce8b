//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport-level)
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

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Best-effort user-facing message, the string a toast would show.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(_) => "Network error, please try again".to_string(),
            ClientError::Unauthorized => "Please sign in again".to_string(),
            ClientError::Forbidden(msg)
            | ClientError::NotFound(msg)
            | ClientError::Validation(msg)
            | ClientError::Internal(msg)
            | ClientError::InvalidResponse(msg) => msg.clone(),
            ClientError::Serialization(_) => "Unexpected response from server".to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Extract the human-readable message from an error response body.
///
/// Bodies are usually `{"message": "..."}` or `{"error": "..."}`; anything
/// else falls back to a generic status-based message.
pub fn extract_error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return msg.to_string();
                }
            }
        }
    }
    format!("Request failed with status {}", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn message_field_is_preferred() {
        let msg = extract_error_message(
            r#"{"message": "email already taken", "error": "dup"}"#,
            StatusCode::BAD_REQUEST,
        );
        assert_eq!(msg, "email already taken");
    }

    #[test]
    fn error_field_is_fallback() {
        let msg = extract_error_message(r#"{"error": "boom"}"#, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "boom");
    }

    #[test]
    fn non_json_body_uses_generic_message() {
        let msg = extract_error_message("<html>502</html>", StatusCode::BAD_GATEWAY);
        assert_eq!(msg, "Request failed with status 502");
    }

    #[test]
    fn empty_message_is_skipped() {
        let msg = extract_error_message(r#"{"message": ""}"#, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Request failed with status 400");
    }
}
