//! HTTP adapter implementing the object-safe `RawApiPort`
//!
//! Desktop builds use reqwest; wasm builds use gloo-net (the browser's fetch).
//! Paths passed in must already be percent-encoded; this adapter only joins
//! them onto the base URL.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Default backend for the public hospital dataset.
pub const DEFAULT_API_BASE_URL: &str = "https://meddata-backend.onrender.com";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// REST adapter for the hospital-data backend.
#[derive(Clone)]
pub struct HttpApiAdapter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpApiAdapter {
    /// Create an adapter for the given base URL (trailing slashes trimmed).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == 404 {
            return Err(ApiError::NotFound(path.to_string()));
        }
        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_from_the_base_url() {
        let adapter = HttpApiAdapter::new("https://example.test/");
        assert_eq!(adapter.url_for("/states"), "https://example.test/states");
    }

    #[test]
    fn joins_paths_verbatim() {
        let adapter = HttpApiAdapter::new(DEFAULT_API_BASE_URL);
        assert_eq!(
            adapter.url_for("/cities/New%20York"),
            "https://meddata-backend.onrender.com/cities/New%20York"
        );
    }
}
