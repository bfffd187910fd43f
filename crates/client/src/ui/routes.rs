//! Application routes

use dioxus::prelude::*;

use crate::presentation::components::NavBar;
use crate::presentation::pages::{Bookings, Home};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/bookings")]
    Bookings {},
}

/// Shared chrome around every page: nav bar on top, page content below.
#[component]
fn AppShell() -> Element {
    rsx! {
        NavBar {}
        main { class: "page-body",
            Outlet::<Route> {}
        }
    }
}
