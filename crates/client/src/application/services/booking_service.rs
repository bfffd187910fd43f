//! Booking Service - persistence for booked hospital visits
//!
//! Bookings live in platform storage (localStorage on web, a JSON file on
//! desktop) as one serialized list under `storage_keys::BOOKINGS`.

use std::sync::Arc;

use chrono::DateTime;

use medfind_shared::BookingRecord;

use crate::application::ServiceError;
use crate::ports::outbound::{storage_keys, PlatformPort};

#[derive(Clone)]
pub struct BookingService {
    platform: Arc<dyn PlatformPort>,
}

impl BookingService {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }

    /// All bookings made on this device, oldest first.
    pub fn load_bookings(&self) -> Result<Vec<BookingRecord>, ServiceError> {
        let Some(raw) = self.platform.storage_load(storage_keys::BOOKINGS) else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| ServiceError::Storage(e.to_string()))
    }

    /// Record a visit booking and persist the updated list.
    ///
    /// An unreadable existing store is logged and replaced rather than
    /// blocking new bookings.
    pub fn book(
        &self,
        hospital_name: &str,
        city_name: &str,
        state_name: &str,
    ) -> Result<BookingRecord, ServiceError> {
        let mut bookings = match self.load_bookings() {
            Ok(list) => list,
            Err(e) => {
                self.platform
                    .log_warn(&format!("Resetting unreadable booking store: {e}"));
                Vec::new()
            }
        };

        let booked_at =
            DateTime::from_timestamp(self.platform.now_unix_secs() as i64, 0).unwrap_or_default();
        let record = BookingRecord::new(hospital_name, city_name, state_name, booked_at);
        bookings.push(record.clone());

        let raw =
            serde_json::to_string(&bookings).map_err(|e| ServiceError::Storage(e.to_string()))?;
        self.platform.storage_save(storage_keys::BOOKINGS, &raw);

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{
        create_mock_platform, MockDocumentProvider, MockLogProvider, MockSleepProvider,
        MockStorageProvider, MockTimeProvider,
    };
    use crate::state::Platform;

    fn platform_at(now_secs: u64) -> Platform {
        Platform::new(
            MockTimeProvider::at(now_secs),
            MockSleepProvider,
            MockStorageProvider::default(),
            MockLogProvider::default(),
            MockDocumentProvider::default(),
        )
    }

    #[test]
    fn an_absent_store_is_an_empty_list() {
        let service = BookingService::new(Arc::new(create_mock_platform()));

        assert!(service.load_bookings().unwrap().is_empty());
    }

    #[test]
    fn bookings_persist_and_reload() {
        let platform = Arc::new(create_mock_platform());
        let service = BookingService::new(platform.clone());

        let booked = service.book("Austin General", "Austin", "Texas").unwrap();
        let loaded = service.load_bookings().unwrap();

        assert_eq!(loaded, vec![booked.clone()]);
        assert_eq!(booked.hospital_name, "Austin General");
        assert_eq!(booked.city_name, "Austin");
        assert_eq!(booked.state_name, "Texas");

        // A second booking appends rather than replaces.
        service.book("Seton", "Austin", "Texas").unwrap();
        assert_eq!(service.load_bookings().unwrap().len(), 2);
    }

    #[test]
    fn timestamps_come_from_the_platform_clock() {
        let service = BookingService::new(Arc::new(platform_at(42)));

        let booked = service.book("Mercy", "Tulsa", "Oklahoma").unwrap();

        assert_eq!(booked.booked_at.timestamp(), 42);
    }

    #[test]
    fn a_corrupt_store_is_a_storage_error() {
        let platform = create_mock_platform();
        platform.storage_save(storage_keys::BOOKINGS, "not json");
        let service = BookingService::new(Arc::new(platform));

        assert!(matches!(
            service.load_bookings(),
            Err(ServiceError::Storage(_))
        ));
    }

    #[test]
    fn booking_over_a_corrupt_store_starts_fresh() {
        let platform = create_mock_platform();
        platform.storage_save(storage_keys::BOOKINGS, "{broken");
        let service = BookingService::new(Arc::new(platform));

        service.book("Mercy", "Tulsa", "Oklahoma").unwrap();

        assert_eq!(service.load_bookings().unwrap().len(), 1);
    }
}
