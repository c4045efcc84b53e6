//! The `{result, data, error}` wrapper every endpoint answers with.

use serde::Deserialize;

/// Generic response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Backend status marker, e.g. `"SUCCESS"`.
    pub result: String,
    /// Payload, absent when the backend reports a failure or has nothing.
    pub data: Option<T>,
    /// Failure details.
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiResponse<T> {
    /// Message from the error block, falling back to its code.
    pub fn error_message(&self) -> Option<String> {
        let error = self.error.as_ref()?;
        error.message.clone().or_else(|| error.code.clone())
    }
}

/// Error block of the envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_data() {
        let envelope: ApiResponse<i64> =
            serde_json::from_str(r#"{"result":"SUCCESS","data":7,"error":null}"#).unwrap();
        assert_eq!(envelope.result, "SUCCESS");
        assert_eq!(envelope.data, Some(7));
        assert!(envelope.error_message().is_none());
    }

    #[test]
    fn test_missing_data_and_error_fields_are_none() {
        let envelope: ApiResponse<i64> = serde_json::from_str(r#"{"result":"SUCCESS"}"#).unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_error_message_prefers_message_over_code() {
        let envelope: ApiResponse<i64> = serde_json::from_str(
            r#"{"result":"ERROR","data":null,"error":{"code":"P404","message":"Post not found"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.error_message(), Some("Post not found".to_string()));

        let envelope: ApiResponse<i64> = serde_json::from_str(
            r#"{"result":"ERROR","data":null,"error":{"code":"P404","message":null}}"#,
        )
        .unwrap();
        assert_eq!(envelope.error_message(), Some("P404".to_string()));
    }
}
