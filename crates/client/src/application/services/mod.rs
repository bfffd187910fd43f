//! Application services
//!
//! Use case implementations for the MedFind client. Services depend on port
//! traits, not concrete infrastructure implementations.

pub mod booking_service;
pub mod location_service;

pub use booking_service::BookingService;
pub use location_service::LocationService;
