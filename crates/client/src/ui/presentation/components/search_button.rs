//! Submit button for the search form
//!
//! Thin presentational wrapper: label text plus a loading flag that swaps
//! in the spinner styling. Deliberately knows nothing about the search.

use dioxus::prelude::*;

#[component]
pub fn SearchButton(label: String, #[props(default = false)] loading: bool) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: if loading { "search-button search-button-loading" } else { "search-button" },
            "{label}"
        }
    }
}
