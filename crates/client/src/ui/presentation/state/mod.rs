//! Presentation state containers backed by Dioxus signals

pub mod bookings_state;
pub mod results_state;

pub use bookings_state::{use_bookings, BookingsState};
pub use results_state::{use_found_hospitals, FoundHospitalsState};
