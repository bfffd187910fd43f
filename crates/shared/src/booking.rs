//! Persisted booking records
//!
//! Bookings are stored client-side as a JSON array under a single storage
//! key. The shape must stay stable across releases; add fields with
//! `#[serde(default)]` rather than renaming existing ones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booked visit to a medical center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    pub hospital_name: String,
    pub city_name: String,
    pub state_name: String,
    pub booked_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Create a booking with a fresh id.
    ///
    /// The timestamp comes from the caller so that clock access stays behind
    /// the platform port (wasm builds have no usable system clock).
    pub fn new(
        hospital_name: impl Into<String>,
        city_name: impl Into<String>,
        state_name: impl Into<String>,
        booked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            hospital_name: hospital_name.into(),
            city_name: city_name.into(),
            state_name: state_name.into(),
            booked_at,
        }
    }
}
