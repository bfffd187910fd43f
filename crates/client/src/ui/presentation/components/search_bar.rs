//! The cascading state → city → hospital search widget
//!
//! Owns a [`SearchFlow`] model in a single signal. Every DOM event applies
//! one synchronous model transition; when the transition emits a
//! [`SearchEffect`], the widget runs it as a spawned service call and feeds
//! the completion back into the model. The model decides token-first whether
//! a completion still applies, so stale responses never reach the screen.

use dioxus::prelude::*;

use crate::application::{SearchEffect, SearchFlow};
use crate::infrastructure::spawn_task;
use crate::presentation::components::{SearchButton, SearchDropdown};
use crate::presentation::services::use_location_service;
use crate::presentation::state::use_found_hospitals;
use crate::use_platform;

/// How long a blurred dropdown stays up so an item click can land first.
const DROPDOWN_CLOSE_GRACE_MS: u64 = 200;

#[component]
pub fn SearchBar(#[props(default = false)] at_bookings_page: bool) -> Element {
    let platform = use_platform();
    let location_service = use_location_service();
    let mut found_hospitals = use_found_hospitals();

    let mut flow = use_signal(SearchFlow::new);

    // Runs one emitted effect. Completions re-enter the model, which drops
    // them there if their token is no longer the newest issued.
    let run_effect = {
        let service = location_service.clone();
        let platform = platform.clone();
        move |effect: SearchEffect| {
            let service = service.clone();
            let platform = platform.clone();
            spawn_task(async move {
                match effect {
                    SearchEffect::FetchStates => match service.fetch_states().await {
                        Ok(states) => flow.write().states_loaded(states),
                        Err(e) => {
                            platform.log_error(&format!("Error fetching states: {e}"));
                            flow.write().states_failed();
                        }
                    },
                    SearchEffect::FetchCities { state, token } => {
                        match service.fetch_cities(&state).await {
                            Ok(cities) => flow.write().cities_loaded(token, cities),
                            Err(e) => {
                                platform.log_error(&format!("Error fetching cities: {e}"));
                                flow.write().cities_failed(token);
                            }
                        }
                    }
                    SearchEffect::FetchHospitals { state, city, token } => {
                        match service.search_hospitals(&state, &city).await {
                            Ok(records) => {
                                let results = flow.write().hospitals_loaded(token, records);
                                if let Some(results) = results {
                                    found_hospitals.publish(results);
                                }
                            }
                            Err(e) => {
                                platform.log_error(&format!("Error fetching hospitals: {e}"));
                                flow.write().hospitals_failed(token);
                            }
                        }
                    }
                }
            });
        }
    };

    let on_state_focus = {
        let run = run_effect.clone();
        move |_| {
            if let Some(effect) = flow.write().focus_state_input() {
                run(effect);
            }
        }
    };

    let on_state_input = {
        let run = run_effect.clone();
        move |evt: FormEvent| {
            if let Some(effect) = flow.write().edit_state_input(evt.value()) {
                run(effect);
            }
        }
    };

    let on_state_blur = {
        let platform = platform.clone();
        move |_| {
            let ticket = flow.read().blur_state_input();
            let platform = platform.clone();
            spawn_task(async move {
                platform.sleep_ms(DROPDOWN_CLOSE_GRACE_MS).await;
                flow.write().close_state_dropdown(ticket);
            });
        }
    };

    let on_select_state = {
        let run = run_effect.clone();
        move |name: String| {
            let effect = flow.write().select_state(name);
            run(effect);
        }
    };

    let on_city_focus = {
        let run = run_effect.clone();
        move |_| {
            if let Some(effect) = flow.write().focus_city_input() {
                run(effect);
            }
        }
    };

    let on_city_input = move |evt: FormEvent| {
        flow.write().edit_city_input(evt.value());
    };

    let on_city_blur = {
        let platform = platform.clone();
        move |_| {
            let ticket = flow.read().blur_city_input();
            let platform = platform.clone();
            spawn_task(async move {
                platform.sleep_ms(DROPDOWN_CLOSE_GRACE_MS).await;
                flow.write().close_city_dropdown(ticket);
            });
        }
    };

    let on_select_city = move |name: String| {
        flow.write().select_city(name);
    };

    let on_submit = {
        let run = run_effect.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if at_bookings_page {
                return;
            }
            if let Some(effect) = flow.write().submit() {
                run(effect);
            }
        }
    };

    let model = flow.read();
    let state_value = model.query().state_name.clone();
    let city_value = model.query().city_name.clone();
    let filtered_states = model.filtered_states().to_vec();
    let filtered_cities = model.filtered_cities().to_vec();
    let show_state_dropdown = model.show_state_dropdown();
    let show_city_dropdown = model.show_city_dropdown();
    let city_enabled = model.city_input_enabled();
    let cities_loading = model.cities_loading();
    let hospitals_loading = model.hospitals_loading();
    let button_label = if hospitals_loading {
        "Fetching..."
    } else {
        "Search"
    }
    .to_string();
    drop(model);

    rsx! {
        form { class: "search-bar", onsubmit: on_submit,
            div { class: "search-field",
                input {
                    r#type: "text",
                    name: "state",
                    placeholder: "State",
                    autocomplete: "off",
                    required: true,
                    value: "{state_value}",
                    onfocus: on_state_focus,
                    oninput: on_state_input,
                    onblur: on_state_blur,
                }
                if show_state_dropdown {
                    SearchDropdown {
                        options: filtered_states,
                        on_select: on_select_state,
                    }
                }
            }
            div {
                class: if city_enabled { "search-field" } else { "search-field search-field-disabled" },
                input {
                    r#type: "text",
                    name: "city",
                    placeholder: if cities_loading { "Fetching cities..." } else { "City" },
                    autocomplete: "off",
                    required: true,
                    disabled: !city_enabled,
                    value: "{city_value}",
                    onfocus: on_city_focus,
                    oninput: on_city_input,
                    onblur: on_city_blur,
                }
                if show_city_dropdown {
                    SearchDropdown {
                        options: filtered_cities,
                        on_select: on_select_city,
                    }
                }
            }
            SearchButton { label: button_label, loading: hospitals_loading }
        }
    }
}
