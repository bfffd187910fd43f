//! Home page - search hero plus the results listing

use dioxus::prelude::*;

use crate::presentation::components::{HospitalResults, SearchBar};
use crate::use_platform;

#[component]
pub fn Home() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("MedFind - Find a medical center");
    });

    rsx! {
        section { class: "search-hero",
            h1 { class: "search-hero-title", "Find a medical center near you" }
            p { class: "search-hero-subtitle",
                "Pick a state and city, then search the public hospital directory."
            }
            SearchBar {}
        }
        HospitalResults {}
    }
}
