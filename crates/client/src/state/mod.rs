//! State containers for client-side dependency injection
//!
//! This module contains DI containers that aggregate platform providers.
//! These are concrete implementations that belong in the adapters layer,
//! not the ports layer.

mod platform;

pub use platform::Platform;
