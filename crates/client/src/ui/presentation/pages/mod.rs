//! Routed pages

pub mod bookings;
pub mod home;

pub use bookings::Bookings;
pub use home::Home;
