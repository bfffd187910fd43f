//! Headless state machine for the cascading state → city → hospital search.
//!
//! `SearchFlow` owns every piece of search state (query text, cached and
//! filtered option lists, dropdown visibility, loading flags) and encodes the
//! request-sequencing rules as synchronous transitions. Methods that require
//! network work return a [`SearchEffect`]; the owning component executes the
//! effect asynchronously and feeds the outcome back in through the
//! `*_loaded` / `*_failed` transitions. Keeping the machine free of async
//! and UI types makes the sequencing rules unit-testable without a runtime.
//!
//! Staleness policy: the last-issued fetch per field wins. City and hospital
//! fetches carry a monotonically increasing token captured at emission time,
//! and completions are applied only while their token is still the newest
//! issued. A stale completion is dropped entirely, loading flags included,
//! since those now describe the newer in-flight request. The states fetch is
//! deduplicated instead of tokenized: it is issued at most once while the
//! cached list is empty.

use medfind_shared::HospitalRecord;

/// The two user-entered query fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub state_name: String,
    pub city_name: String,
}

/// A completed hospital search, published to the shared results context.
///
/// Carries the query snapshot taken at submission time, not whatever the
/// inputs hold when the response lands.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub hospitals: Vec<HospitalRecord>,
    pub city_name: String,
    pub state_name: String,
}

/// Async work the owning component must run on behalf of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEffect {
    FetchStates,
    FetchCities { state: String, token: u64 },
    FetchHospitals { state: String, city: String, token: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct SearchFlow {
    query: SearchQuery,

    states_list: Vec<String>,
    filtered_states: Vec<String>,
    cities_list: Vec<String>,
    filtered_cities: Vec<String>,

    show_state_dropdown: bool,
    show_city_dropdown: bool,
    city_input_enabled: bool,

    states_loading: bool,
    cities_loading: bool,
    hospitals_loading: bool,

    // Newest issued token per fetched field; 0 means never issued.
    city_token: u64,
    hospital_token: u64,

    // Bumped on every focus; blur tickets compare against these.
    state_focus_epoch: u64,
    city_focus_epoch: u64,

    submitted: Option<SearchQuery>,
}

impl SearchFlow {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // State input
    // ------------------------------------------------------------------

    /// Focus on the state input. Opens the dropdown and, if the state list
    /// has never loaded and no fetch is in flight, asks for one.
    pub fn focus_state_input(&mut self) -> Option<SearchEffect> {
        self.state_focus_epoch += 1;
        self.show_state_dropdown = true;
        if self.states_list.is_empty() {
            return self.request_states();
        }
        // Re-focus with a cached list resets the view to the full list.
        self.filtered_states = self.states_list.clone();
        None
    }

    /// A keystroke in the state input. Filters the cached list; a fetch is
    /// issued only if the list has never loaded (e.g. the focus-time fetch
    /// failed and the user kept typing).
    pub fn edit_state_input(&mut self, text: impl Into<String>) -> Option<SearchEffect> {
        self.query.state_name = text.into();
        self.filtered_states = filter_options(&self.states_list, &self.query.state_name);
        self.show_state_dropdown = true;
        if self.states_list.is_empty() {
            return self.request_states();
        }
        None
    }

    pub fn states_loaded(&mut self, states: Vec<String>) {
        self.states_loading = false;
        self.states_list = states;
        self.filtered_states = filter_options(&self.states_list, &self.query.state_name);
    }

    /// A failed states fetch leaves the dropdown flag untouched and the
    /// lists empty; the next focus or keystroke may retry.
    pub fn states_failed(&mut self) {
        self.states_loading = false;
    }

    /// Dropdown click on a state. Always refetches cities, even when the
    /// same state is picked again.
    pub fn select_state(&mut self, name: impl Into<String>) -> SearchEffect {
        self.query.state_name = name.into();
        self.filtered_states.clear();
        self.show_state_dropdown = false;

        // The old city choices belong to the old state.
        self.query.city_name.clear();
        self.cities_list.clear();
        self.filtered_cities.clear();
        self.city_input_enabled = false;

        self.issue_city_fetch()
    }

    fn request_states(&mut self) -> Option<SearchEffect> {
        if self.states_loading {
            return None;
        }
        self.states_loading = true;
        Some(SearchEffect::FetchStates)
    }

    // ------------------------------------------------------------------
    // City input
    // ------------------------------------------------------------------

    /// Focus on the city input. Ignored while disabled. Re-fetches when the
    /// cached list is empty (the chosen state may genuinely have no cities,
    /// but a retry is the behavior users expect after a dropped response).
    pub fn focus_city_input(&mut self) -> Option<SearchEffect> {
        if !self.city_input_enabled {
            return None;
        }
        self.city_focus_epoch += 1;
        self.show_city_dropdown = true;
        if self.cities_list.is_empty() {
            if self.cities_loading {
                return None;
            }
            return Some(self.issue_city_fetch());
        }
        self.filtered_cities = self.cities_list.clone();
        None
    }

    /// A keystroke in the city input. Only permitted once enabled.
    pub fn edit_city_input(&mut self, text: impl Into<String>) {
        if !self.city_input_enabled {
            return;
        }
        self.query.city_name = text.into();
        self.filtered_cities = filter_options(&self.cities_list, &self.query.city_name);
        self.show_city_dropdown = true;
    }

    /// City list arrived. Applied only while `token` is still the newest.
    pub fn cities_loaded(&mut self, token: u64, cities: Vec<String>) {
        if token != self.city_token {
            return;
        }
        self.cities_loading = false;
        self.cities_list = cities.clone();
        self.filtered_cities = cities;
        self.city_input_enabled = true;
        self.show_city_dropdown = true;
    }

    /// City fetch failed. The input stays disabled; selecting the state
    /// again (or focusing the input once enabled) retries.
    pub fn cities_failed(&mut self, token: u64) {
        if token != self.city_token {
            return;
        }
        self.cities_loading = false;
    }

    pub fn select_city(&mut self, name: impl Into<String>) {
        self.query.city_name = name.into();
        self.filtered_cities.clear();
        self.show_city_dropdown = false;
    }

    fn issue_city_fetch(&mut self) -> SearchEffect {
        self.city_token += 1;
        self.cities_loading = true;
        SearchEffect::FetchCities {
            state: self.query.state_name.clone(),
            token: self.city_token,
        }
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Explicit Search action. A no-op while either field is empty.
    /// Re-submission while a search is in flight is allowed; the new token
    /// supersedes the old fetch.
    pub fn submit(&mut self) -> Option<SearchEffect> {
        if self.query.state_name.is_empty() || self.query.city_name.is_empty() {
            return None;
        }
        self.hospital_token += 1;
        self.hospitals_loading = true;
        self.submitted = Some(self.query.clone());
        Some(SearchEffect::FetchHospitals {
            state: self.query.state_name.clone(),
            city: self.query.city_name.clone(),
            token: self.hospital_token,
        })
    }

    /// Hospital records arrived. When `token` is still the newest, yields
    /// the results (built from the submitted snapshot) for the component to
    /// publish.
    pub fn hospitals_loaded(
        &mut self,
        token: u64,
        hospitals: Vec<HospitalRecord>,
    ) -> Option<SearchResults> {
        if token != self.hospital_token {
            return None;
        }
        self.hospitals_loading = false;
        let query = self.submitted.clone()?;
        Some(SearchResults {
            hospitals,
            city_name: query.city_name,
            state_name: query.state_name,
        })
    }

    /// Hospital fetch failed. Prior results stay untouched.
    pub fn hospitals_failed(&mut self, token: u64) {
        if token != self.hospital_token {
            return;
        }
        self.hospitals_loading = false;
    }

    // ------------------------------------------------------------------
    // Deferred dropdown close
    // ------------------------------------------------------------------
    //
    // Blur returns a ticket (the focus epoch at blur time); the component
    // sleeps through a short grace delay and then offers the ticket back.
    // Any newer focus bumps the epoch and invalidates outstanding tickets,
    // so a stale deferred close cannot shut a dropdown the user re-entered.
    // The grace delay exists so a click on a dropdown item, which blurs the
    // input first, still registers before the list unmounts.

    pub fn blur_state_input(&self) -> u64 {
        self.state_focus_epoch
    }

    pub fn close_state_dropdown(&mut self, ticket: u64) {
        if ticket == self.state_focus_epoch {
            self.show_state_dropdown = false;
        }
    }

    pub fn blur_city_input(&self) -> u64 {
        self.city_focus_epoch
    }

    pub fn close_city_dropdown(&mut self, ticket: u64) {
        if ticket == self.city_focus_epoch {
            self.show_city_dropdown = false;
        }
    }

    // ------------------------------------------------------------------
    // View accessors
    // ------------------------------------------------------------------

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn filtered_states(&self) -> &[String] {
        &self.filtered_states
    }

    pub fn filtered_cities(&self) -> &[String] {
        &self.filtered_cities
    }

    pub fn show_state_dropdown(&self) -> bool {
        self.show_state_dropdown
    }

    pub fn show_city_dropdown(&self) -> bool {
        self.show_city_dropdown
    }

    pub fn city_input_enabled(&self) -> bool {
        self.city_input_enabled
    }

    pub fn cities_loading(&self) -> bool {
        self.cities_loading
    }

    pub fn hospitals_loading(&self) -> bool {
        self.hospitals_loading
    }
}

/// Case-insensitive substring filter, preserving the server-returned order.
fn filter_options(options: &[String], input: &str) -> Vec<String> {
    let needle = input.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn record(name: &str) -> HospitalRecord {
        HospitalRecord::new(json!({ "Hospital Name": name }))
    }

    /// Flow with a loaded state list, dropdown open.
    fn flow_with_states(states: &[&str]) -> SearchFlow {
        let mut flow = SearchFlow::new();
        assert_eq!(flow.focus_state_input(), Some(SearchEffect::FetchStates));
        flow.states_loaded(names(states));
        flow
    }

    /// Flow ready to submit: Texas selected, Austin chosen as the city.
    fn flow_ready_to_submit() -> SearchFlow {
        let mut flow = flow_with_states(&["Texas", "California"]);
        let SearchEffect::FetchCities { token, .. } = flow.select_state("Texas") else {
            panic!("selecting a state must fetch cities");
        };
        flow.cities_loaded(token, names(&["Austin", "Dallas"]));
        flow.select_city("Austin");
        flow
    }

    #[test]
    fn filtering_matches_case_insensitive_substrings_in_order() {
        let options = names(&["Alabama", "Arkansas", "Kansas", "Kentucky"]);

        assert_eq!(filter_options(&options, "kan"), names(&["Arkansas", "Kansas"]));
        assert_eq!(filter_options(&options, "KAN"), names(&["Arkansas", "Kansas"]));
        assert_eq!(filter_options(&options, "z"), Vec::<String>::new());
        assert_eq!(filter_options(&options, ""), options);
    }

    #[test]
    fn first_focus_fetches_states_and_opens_the_dropdown() {
        let mut flow = SearchFlow::new();

        assert_eq!(flow.focus_state_input(), Some(SearchEffect::FetchStates));
        assert!(flow.show_state_dropdown());

        // Re-focus while the fetch is in flight must not issue a duplicate.
        assert_eq!(flow.focus_state_input(), None);
    }

    #[test]
    fn refocusing_with_a_cached_list_resets_the_filter() {
        let mut flow = flow_with_states(&["California", "Colorado", "Texas"]);
        flow.edit_state_input("col");
        assert_eq!(flow.filtered_states(), names(&["Colorado"]));

        assert_eq!(flow.focus_state_input(), None);
        assert_eq!(
            flow.filtered_states(),
            names(&["California", "Colorado", "Texas"])
        );
    }

    #[test]
    fn typing_filters_the_cached_state_list() {
        let mut flow = flow_with_states(&["California", "Colorado", "Texas"]);

        assert_eq!(flow.edit_state_input("cal"), None);

        assert_eq!(flow.query().state_name, "cal");
        assert_eq!(flow.filtered_states(), names(&["California"]));
        assert!(flow.show_state_dropdown());
    }

    #[test]
    fn typing_after_a_failed_fetch_retries() {
        let mut flow = SearchFlow::new();
        assert_eq!(flow.focus_state_input(), Some(SearchEffect::FetchStates));

        // While the fetch is in flight, keystrokes don't pile up requests.
        assert_eq!(flow.edit_state_input("ca"), None);

        flow.states_failed();
        assert_eq!(flow.edit_state_input("cal"), Some(SearchEffect::FetchStates));
    }

    #[test]
    fn a_failed_states_fetch_leaves_the_dropdown_open_and_the_list_empty() {
        let mut flow = SearchFlow::new();
        flow.focus_state_input();

        flow.states_failed();

        assert!(flow.filtered_states().is_empty());
        assert!(flow.show_state_dropdown());
    }

    #[test]
    fn a_late_states_response_is_filtered_against_the_typed_text() {
        let mut flow = SearchFlow::new();
        flow.focus_state_input();
        flow.edit_state_input("tex");

        flow.states_loaded(names(&["California", "Texas"]));

        assert_eq!(flow.filtered_states(), names(&["Texas"]));
    }

    #[test]
    fn selecting_a_state_resets_the_city_side_and_fetches_cities() {
        let mut flow = flow_ready_to_submit();
        assert_eq!(flow.query().city_name, "Austin");

        let effect = flow.select_state("California");

        assert_eq!(flow.query().state_name, "California");
        assert_eq!(flow.query().city_name, "");
        assert!(flow.filtered_states().is_empty());
        assert!(!flow.show_state_dropdown());
        assert!(flow.filtered_cities().is_empty());
        assert!(!flow.city_input_enabled());
        assert!(flow.cities_loading());
        assert!(matches!(
            effect,
            SearchEffect::FetchCities { state, .. } if state == "California"
        ));
    }

    #[test]
    fn loaded_cities_enable_the_input_and_open_the_dropdown() {
        let mut flow = flow_with_states(&["California"]);

        let SearchEffect::FetchCities { token, .. } = flow.select_state("California") else {
            panic!("selecting a state must fetch cities");
        };
        flow.cities_loaded(token, names(&["Los Angeles", "San Diego"]));

        assert!(flow.city_input_enabled());
        assert!(flow.show_city_dropdown());
        assert!(!flow.cities_loading());
        assert_eq!(flow.filtered_cities(), names(&["Los Angeles", "San Diego"]));
    }

    #[test]
    fn a_stale_city_response_never_lands() {
        let mut flow = flow_with_states(&["Alaska", "Hawaii"]);

        let SearchEffect::FetchCities { token: stale, .. } = flow.select_state("Alaska") else {
            panic!("expected a city fetch");
        };
        let SearchEffect::FetchCities { token: current, .. } = flow.select_state("Hawaii") else {
            panic!("expected a city fetch");
        };

        flow.cities_loaded(stale, names(&["Anchorage", "Juneau"]));

        // Nothing from the superseded fetch applies, the loading flag
        // included: it now describes the Hawaii request.
        assert!(flow.filtered_cities().is_empty());
        assert!(!flow.city_input_enabled());
        assert!(flow.cities_loading());

        flow.cities_loaded(current, names(&["Honolulu", "Hilo"]));
        assert_eq!(flow.filtered_cities(), names(&["Honolulu", "Hilo"]));
        assert!(flow.city_input_enabled());
    }

    #[test]
    fn a_stale_city_failure_keeps_the_newer_fetch_loading() {
        let mut flow = flow_with_states(&["Alaska", "Hawaii"]);

        let SearchEffect::FetchCities { token: stale, .. } = flow.select_state("Alaska") else {
            panic!("expected a city fetch");
        };
        let SearchEffect::FetchCities { token: current, .. } = flow.select_state("Hawaii") else {
            panic!("expected a city fetch");
        };

        flow.cities_failed(stale);
        assert!(flow.cities_loading());

        flow.cities_loaded(current, names(&["Honolulu"]));
        assert!(!flow.cities_loading());
        assert_eq!(flow.filtered_cities(), names(&["Honolulu"]));
    }

    #[test]
    fn city_focus_refetches_only_when_the_list_is_empty() {
        let mut flow = flow_with_states(&["Wyoming"]);
        let SearchEffect::FetchCities { token, .. } = flow.select_state("Wyoming") else {
            panic!("expected a city fetch");
        };
        flow.cities_loaded(token, vec![]);
        assert!(flow.city_input_enabled());

        let effect = flow.focus_city_input();
        assert!(matches!(
            effect,
            Some(SearchEffect::FetchCities { state, .. }) if state == "Wyoming"
        ));

        // A second focus while that retry is in flight stays quiet.
        assert_eq!(flow.focus_city_input(), None);
    }

    #[test]
    fn city_input_is_inert_until_enabled() {
        let mut flow = SearchFlow::new();

        assert_eq!(flow.focus_city_input(), None);
        flow.edit_city_input("Aus");

        assert_eq!(flow.query().city_name, "");
        assert!(!flow.show_city_dropdown());
    }

    #[test]
    fn selecting_a_city_closes_the_dropdown() {
        let flow = flow_ready_to_submit();

        assert_eq!(flow.query().city_name, "Austin");
        assert!(!flow.show_city_dropdown());
        assert!(flow.filtered_cities().is_empty());
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut flow = SearchFlow::new();
        assert_eq!(flow.submit(), None);

        let mut flow = flow_with_states(&["Texas"]);
        flow.edit_state_input("Texas");
        assert_eq!(flow.submit(), None);
        assert!(!flow.hospitals_loading());
    }

    #[test]
    fn submitting_publishes_the_snapshot_query() {
        let mut flow = flow_ready_to_submit();

        let Some(SearchEffect::FetchHospitals { state, city, token }) = flow.submit() else {
            panic!("expected a hospital fetch");
        };
        assert_eq!(state, "Texas");
        assert_eq!(city, "Austin");
        assert!(flow.hospitals_loading());

        // The user edits the inputs while the search is in flight; the
        // published results still carry the submitted query.
        flow.edit_state_input("Nev");

        let hospitals = vec![record("Austin General"), record("Seton"), record("St. David's")];
        let results = flow.hospitals_loaded(token, hospitals.clone());

        assert_eq!(
            results,
            Some(SearchResults {
                hospitals,
                city_name: "Austin".to_string(),
                state_name: "Texas".to_string(),
            })
        );
        assert!(!flow.hospitals_loading());
    }

    #[test]
    fn a_resubmission_supersedes_the_previous_search() {
        let mut flow = flow_ready_to_submit();

        let Some(SearchEffect::FetchHospitals { token: stale, .. }) = flow.submit() else {
            panic!("expected a hospital fetch");
        };
        flow.select_city("Dallas");
        let Some(SearchEffect::FetchHospitals { token: current, .. }) = flow.submit() else {
            panic!("expected a hospital fetch");
        };

        assert_eq!(flow.hospitals_loaded(stale, vec![record("Old")]), None);
        assert!(flow.hospitals_loading());

        let results = flow.hospitals_loaded(current, vec![record("New")]);
        assert_eq!(
            results.map(|r| r.city_name),
            Some("Dallas".to_string())
        );
        assert!(!flow.hospitals_loading());
    }

    #[test]
    fn a_failed_search_only_clears_the_loading_flag() {
        let mut flow = flow_ready_to_submit();
        let Some(SearchEffect::FetchHospitals { token, .. }) = flow.submit() else {
            panic!("expected a hospital fetch");
        };

        flow.hospitals_failed(token);

        assert!(!flow.hospitals_loading());
        assert_eq!(flow.query().state_name, "Texas");
        assert_eq!(flow.query().city_name, "Austin");
    }

    #[test]
    fn a_deferred_state_close_applies_only_without_a_newer_focus() {
        let mut flow = flow_with_states(&["Texas"]);

        let ticket = flow.blur_state_input();
        flow.close_state_dropdown(ticket);
        assert!(!flow.show_state_dropdown());

        // Blur, then re-focus before the grace delay elapses: the stale
        // ticket must not close the re-opened dropdown.
        flow.focus_state_input();
        let stale = flow.blur_state_input();
        flow.focus_state_input();
        flow.close_state_dropdown(stale);
        assert!(flow.show_state_dropdown());
    }

    #[test]
    fn a_deferred_city_close_applies_only_without_a_newer_focus() {
        let mut flow = flow_with_states(&["Texas"]);
        let SearchEffect::FetchCities { token, .. } = flow.select_state("Texas") else {
            panic!("expected a city fetch");
        };
        flow.cities_loaded(token, names(&["Austin"]));

        let stale = flow.blur_city_input();
        flow.focus_city_input();
        flow.close_city_dropdown(stale);
        assert!(flow.show_city_dropdown());

        let ticket = flow.blur_city_input();
        flow.close_city_dropdown(ticket);
        assert!(!flow.show_city_dropdown());
    }
}
