//! Location Service - REST lookups for the search cascade
//!
//! Typed wrapper over the three backend endpoints the search widget uses.
//! State and city names may contain spaces ("New York"), so path segments
//! and query values are percent-encoded before they reach the HTTP port.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use medfind_shared::HospitalRecord;

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// Bytes escaped inside a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Bytes escaped inside a query value; includes the separators the backend
/// would otherwise split on.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%');

/// Location service backing the state → city → hospital cascade.
#[derive(Clone)]
pub struct LocationService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> LocationService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// List every state the backend knows about.
    pub async fn fetch_states(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.api.get("/states").await?)
    }

    /// List the cities of the given state.
    pub async fn fetch_cities(&self, state: &str) -> Result<Vec<String>, ServiceError> {
        let path = format!("/cities/{}", utf8_percent_encode(state, PATH_SEGMENT));
        Ok(self.api.get(&path).await?)
    }

    /// Fetch the hospital records for a city within a state.
    pub async fn search_hospitals(
        &self,
        state: &str,
        city: &str,
    ) -> Result<Vec<HospitalRecord>, ServiceError> {
        let path = format!(
            "/data?state={}&city={}",
            utf8_percent_encode(state, QUERY_VALUE),
            utf8_percent_encode(city, QUERY_VALUE)
        );
        Ok(self.api.get(&path).await?)
    }
}
