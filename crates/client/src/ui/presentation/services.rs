//! Service providers for the presentation layer
//!
//! Dioxus context providers for application services. Components reach
//! services through `use_context`, so they never depend on infrastructure
//! adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{BookingService, LocationService};
use crate::ports::outbound::{ApiPort, PlatformPort};

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub location: Arc<LocationService<A>>,
    pub booking: Arc<BookingService>,
}

impl<A: ApiPort + Clone> Services<A> {
    /// Create all services with the given ports
    pub fn new(api: A, platform: Arc<dyn PlatformPort>) -> Self {
        Self {
            location: Arc::new(LocationService::new(api)),
            booking: Arc::new(BookingService::new(platform)),
        }
    }
}

/// Hook to access the LocationService from context
pub fn use_location_service() -> Arc<LocationService<Api>> {
    let services = use_context::<UiServices>();
    services.location.clone()
}

/// Hook to access the BookingService from context
pub fn use_booking_service() -> Arc<BookingService> {
    let services = use_context::<UiServices>();
    services.booking.clone()
}
