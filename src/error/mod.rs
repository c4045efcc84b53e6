//! Error handling for the eeum client core.
//!
//! | Variant | Meaning | Retryable |
//! |---------|---------|-----------|
//! | Network | No response received | Yes |
//! | Server | Non-2xx status | 5xx, 408, 429 |
//! | EmptyResult | Envelope `data` absent on a single-entity fetch | No |
//! | Decode | Payload shape mismatch | No |
//!
//! List-returning endpoints treat an absent `data` field as an empty list;
//! only single-entity endpoints raise `EmptyResult`.

mod api;
mod category;

pub use api::ApiError;
pub use category::ErrorCategory;

/// Type alias for Results using [`ApiError`].
pub type ApiResult<T> = Result<T, ApiError>;
