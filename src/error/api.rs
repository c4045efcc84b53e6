//! Errors raised by the repository layer.
//!
//! Repositories never swallow failures; they translate transport and
//! decoding problems into one of these variants and propagate them.

use std::fmt;

use super::category::ErrorCategory;
use crate::traits::{HttpError, TokenStoreError};

/// Repository-level error variants.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Transport-level failure, no response was received.
    Network { message: String },

    /// Non-2xx HTTP response.
    Server { status: u16, message: String },

    /// Envelope decoded but `data` was absent on an operation that
    /// requires a result.
    EmptyResult {
        operation: &'static str,
        message: Option<String>,
    },

    /// Payload did not match the expected shape.
    Decode {
        operation: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Build a decode error for `operation`.
    pub fn decode(operation: &'static str, err: impl fmt::Display) -> Self {
        ApiError::Decode {
            operation,
            message: err.to_string(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Network { .. } => ErrorCategory::Network,
            ApiError::Server { status, .. } if *status == 401 || *status == 403 => {
                ErrorCategory::Auth
            }
            ApiError::Server { .. } | ApiError::EmptyResult { .. } => ErrorCategory::Server,
            ApiError::Decode { .. } => ErrorCategory::Client,
        }
    }

    /// Check if the same call may succeed when repeated.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network { .. } => true,
            ApiError::Server { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            ApiError::EmptyResult { .. } | ApiError::Decode { .. } => false,
        }
    }

    /// HTTP status for `Server` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => {
                "Unable to connect to the server. Please check your internet connection."
                    .to_string()
            }
            ApiError::Server { status, .. } => match *status {
                400 => "The request was invalid. Please try again.".to_string(),
                401 => "Your session has expired. Please sign in again.".to_string(),
                403 => "You don't have permission for this action.".to_string(),
                404 => "The post could not be found.".to_string(),
                500..=599 => "The server is having trouble. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            ApiError::EmptyResult { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Nothing was found.".to_string()),
            ApiError::Decode { .. } => {
                "Received an unexpected response from the server.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "E_NET",
            ApiError::Server { .. } => "E_SERVER",
            ApiError::EmptyResult { .. } => "E_EMPTY",
            ApiError::Decode { .. } => "E_DECODE",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network { message } => write!(f, "Network error: {}", message),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::EmptyResult { operation, message } => match message {
                Some(message) => write!(f, "{} returned no data: {}", operation, message),
                None => write!(f, "{} returned no data", operation),
            },
            ApiError::Decode { operation, message } => {
                write!(f, "Failed to decode {} response: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => ApiError::Server { status, message },
            other => ApiError::Network {
                message: other.to_string(),
            },
        }
    }
}

impl From<TokenStoreError> for ApiError {
    fn from(err: TokenStoreError) -> Self {
        // Only reachable when persisting a fresh token after login.
        ApiError::Network {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_conversion() {
        let err: ApiError = HttpError::Timeout("30s".to_string()).into();
        assert!(matches!(err, ApiError::Network { .. }));
        assert!(err.is_retryable());

        let err: ApiError = HttpError::ServerError {
            status: 404,
            message: "missing".to_string(),
        }
        .into();
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_categories() {
        let auth = ApiError::Server {
            status: 401,
            message: String::new(),
        };
        assert_eq!(auth.category(), ErrorCategory::Auth);

        let empty = ApiError::EmptyResult {
            operation: "getPostDetail",
            message: None,
        };
        assert_eq!(empty.category(), ErrorCategory::Server);
        assert_eq!(empty.error_code(), "E_EMPTY");

        let decode = ApiError::decode("searchMusic", "missing field `songName`");
        assert_eq!(decode.category(), ErrorCategory::Client);
    }

    #[test]
    fn test_display_names_operation() {
        let err = ApiError::EmptyResult {
            operation: "getPostDetail",
            message: Some("POST_NOT_FOUND".to_string()),
        };
        assert_eq!(err.to_string(), "getPostDetail returned no data: POST_NOT_FOUND");
        assert_eq!(err.user_message(), "POST_NOT_FOUND");
    }
}
