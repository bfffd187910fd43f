//! Service layer error types
//!
//! Errors that can occur in the application service layer, abstracting over
//! the HTTP boundary and platform storage.

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    /// The backend call failed (transport, status, or parse).
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    /// Platform storage held data this build cannot read or write.
    #[error("Storage error: {0}")]
    Storage(String),
}
