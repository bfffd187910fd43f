//! Bookings state using Dioxus signals
//!
//! Hydrated from platform storage at app start and appended to by the
//! booking action on the result cards. `BookingService` owns persistence;
//! this state is the in-memory view the UI renders.

use dioxus::prelude::*;

use medfind_shared::BookingRecord;

#[derive(Clone, Copy)]
pub struct BookingsState {
    pub bookings: Signal<Vec<BookingRecord>>,
}

impl BookingsState {
    pub fn new() -> Self {
        Self {
            bookings: Signal::new(Vec::new()),
        }
    }

    /// Replace the whole list (storage hydration).
    pub fn replace(&mut self, bookings: Vec<BookingRecord>) {
        self.bookings.set(bookings);
    }

    /// Append a freshly created booking.
    pub fn add(&mut self, booking: BookingRecord) {
        self.bookings.write().push(booking);
    }

    /// Snapshot of all bookings, oldest first.
    pub fn all(&self) -> Vec<BookingRecord> {
        self.bookings.read().clone()
    }

    /// Whether this hospital has already been booked for the given city and
    /// state on this device.
    pub fn is_booked(&self, hospital_name: &str, city_name: &str, state_name: &str) -> bool {
        self.bookings.read().iter().any(|b| {
            b.hospital_name == hospital_name
                && b.city_name == city_name
                && b.state_name == state_name
        })
    }
}

impl Default for BookingsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the bookings state from context
pub fn use_bookings() -> BookingsState {
    use_context::<BookingsState>()
}
