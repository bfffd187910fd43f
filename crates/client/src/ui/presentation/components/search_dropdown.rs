//! Dropdown list for the search inputs
//!
//! Purely presentational: renders the current option list and reports the
//! clicked item. Renders nothing while the list is empty.

use dioxus::prelude::*;

#[component]
pub fn SearchDropdown(options: Vec<String>, on_select: EventHandler<String>) -> Element {
    if options.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { class: "search-dropdown",
            for (idx, option) in options.iter().enumerate() {
                {
                    let value = option.clone();
                    rsx! {
                        li {
                            key: "{idx}",
                            class: "search-dropdown-item",
                            // Mousedown fires before the input's blur, so the
                            // selection lands even though a deferred close is
                            // about to be scheduled.
                            onmousedown: move |evt| {
                                evt.stop_propagation();
                                on_select.call(value.clone());
                            },
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}
