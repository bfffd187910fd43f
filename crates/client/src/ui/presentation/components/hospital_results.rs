//! Search results listing
//!
//! Reads the shared results context and renders a card per hospital record,
//! each with a booking action. Renders nothing until a search completes.

use dioxus::prelude::*;

use medfind_shared::HospitalRecord;

use crate::presentation::services::use_booking_service;
use crate::presentation::state::{use_bookings, use_found_hospitals};
use crate::use_platform;

#[component]
pub fn HospitalResults() -> Element {
    let found = use_found_hospitals();

    let Some(results) = found.get() else {
        return rsx! {};
    };

    let count = results.hospitals.len();

    rsx! {
        section { class: "hospital-results",
            h2 { class: "hospital-results-heading",
                "{count} medical centers available in "
                span { class: "hospital-results-city", "{results.city_name}" }
            }
            div { class: "hospital-cards",
                for (idx, hospital) in results.hospitals.iter().enumerate() {
                    HospitalCard {
                        key: "{idx}",
                        hospital: hospital.clone(),
                        city_name: results.city_name.clone(),
                        state_name: results.state_name.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn HospitalCard(hospital: HospitalRecord, city_name: String, state_name: String) -> Element {
    let platform = use_platform();
    let booking_service = use_booking_service();
    let mut bookings = use_bookings();

    let name = hospital
        .name()
        .unwrap_or("Unnamed medical center")
        .to_string();
    let hospital_type = hospital.hospital_type().unwrap_or("Hospital").to_string();
    let location = format!("{city_name}, {state_name}");
    let rating = hospital.overall_rating();
    let already_booked = bookings.is_booked(&name, &city_name, &state_name);

    let on_book = {
        let name = name.clone();
        move |_| match booking_service.book(&name, &city_name, &state_name) {
            Ok(record) => bookings.add(record),
            Err(e) => platform.log_error(&format!("Error storing booking: {e}")),
        }
    };

    rsx! {
        article { class: "hospital-card",
            div { class: "hospital-card-body",
                h3 { class: "hospital-card-name", "{name}" }
                p { class: "hospital-card-location", "{location}" }
                p { class: "hospital-card-type", "{hospital_type}" }
                if let Some(rating) = rating {
                    span { class: "hospital-card-rating", "Rating: {rating}" }
                }
            }
            button {
                class: "book-button",
                disabled: already_booked,
                onclick: on_book,
                if already_booked {
                    "Booked"
                } else {
                    "Book visit"
                }
            }
        }
    }
}
