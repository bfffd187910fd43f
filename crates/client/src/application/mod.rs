//! Application layer - Use cases and orchestration

pub mod api;
pub mod error;
pub mod search_flow;
pub mod services;

// Re-export common types
pub use error::ServiceError;
pub use search_flow::{SearchEffect, SearchFlow, SearchQuery, SearchResults};
