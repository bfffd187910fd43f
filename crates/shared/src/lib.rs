//! MedFind Shared - wire-facing data types for the client
//!
//! This crate contains the types that cross a boundary: records returned by
//! the hospital-data backend and records persisted through platform storage.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, uuid, and chrono
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod booking;
pub mod hospital;

pub use booking::BookingRecord;
pub use hospital::HospitalRecord;
