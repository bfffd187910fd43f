//! Typed API port and error type for REST access
//!
//! `ApiPort` is generic over the response type, which makes it not
//! object-safe. Services that want typed responses are generic over
//! `A: ApiPort`; the composition root stores the object-safe `RawApiPort`
//! and wraps it with `application::api::Api`.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors produced by the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The server answered 404 for the given path.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not valid JSON, or did not match the expected shape.
    #[error("failed to parse response: {0}")]
    ParseError(String),
}

/// Typed read access to the backend.
///
/// The hospital-data API is read-only (see `RawApiPort`), so this port only
/// carries GET.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;
}
