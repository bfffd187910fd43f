//! Top navigation bar

use dioxus::prelude::*;

use crate::ui::routes::Route;

#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav { class: "nav-bar",
            Link { class: "nav-brand", to: Route::Home {}, "MedFind" }
            div { class: "nav-links",
                Link { class: "nav-link", to: Route::Home {}, "Find a center" }
                Link { class: "nav-link", to: Route::Bookings {}, "My Bookings" }
            }
        }
    }
}
