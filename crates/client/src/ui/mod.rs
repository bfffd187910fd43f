use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // These must be created inside an active Dioxus runtime.
    let bookings = use_context_provider(presentation::state::BookingsState::new);
    use_context_provider(presentation::state::FoundHospitalsState::new);

    let booking_service = presentation::services::use_booking_service();
    let platform = use_platform();

    // Hydrate persisted bookings once at startup.
    use_effect(move || {
        let mut bookings = bookings;
        match booking_service.load_bookings() {
            Ok(stored) => bookings.replace(stored),
            Err(e) => platform.log_warn(&format!("Skipping booking hydration: {e}")),
        }
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/main.css"),
        }

        Router::<routes::Route> {}
    }
}
