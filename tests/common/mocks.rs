//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `eeum::adapters::mock` and adds shorthands
//! for the responses the backend sends.

pub use eeum::adapters::mock::{InMemoryTokenStore, MockHttpClient, MockResponse};
pub use eeum::traits::{HttpError, Response};

use bytes::Bytes;
use serde_json::Value;

/// 200 with `data` wrapped in an envelope.
pub fn ok(data: Value) -> MockResponse {
    MockResponse::Success(Response::json_ok(super::envelope(data)))
}

/// 200 with a null `data`.
pub fn ok_empty() -> MockResponse {
    MockResponse::Success(Response::json_ok(super::empty_envelope()))
}

/// Non-2xx status with an envelope error block.
pub fn status(code: u16, message: &str) -> MockResponse {
    let body = serde_json::json!({
        "result": "ERROR",
        "data": null,
        "error": { "code": "E", "message": message }
    });
    MockResponse::Success(Response::new(code, Bytes::from(body.to_string())))
}

/// 200 with an arbitrary raw body.
pub fn raw(body: &str) -> MockResponse {
    MockResponse::Success(Response::json_ok(body))
}

/// Transport failure.
pub fn connection_refused() -> MockResponse {
    MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string()))
}
