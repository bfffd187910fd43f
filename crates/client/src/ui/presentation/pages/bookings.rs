//! My Bookings page
//!
//! Lists the visits booked on this device. Mounts the search bar in its
//! suppressed-submission variant so the layout matches the home page
//! without triggering searches from here.

use dioxus::prelude::*;

use crate::presentation::components::SearchBar;
use crate::presentation::state::use_bookings;
use crate::use_platform;

#[component]
pub fn Bookings() -> Element {
    let platform = use_platform();
    let bookings_state = use_bookings();

    use_effect(move || {
        platform.set_page_title("MedFind - My bookings");
    });

    let bookings = bookings_state.all();

    rsx! {
        section { class: "bookings-page",
            header { class: "bookings-header",
                h1 { "My Bookings" }
                SearchBar { at_bookings_page: true }
            }
            if bookings.is_empty() {
                p { class: "bookings-empty", "No visits booked yet." }
            } else {
                ul { class: "booking-list",
                    for booking in bookings.iter() {
                        {
                            let booked_on = booking.booked_at.format("%Y-%m-%d").to_string();
                            rsx! {
                                li { key: "{booking.id}", class: "booking-card",
                                    h3 { class: "booking-card-name", "{booking.hospital_name}" }
                                    p { class: "booking-card-location",
                                        "{booking.city_name}, {booking.state_name}"
                                    }
                                    span { class: "booking-card-date", "Booked on {booked_on}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
