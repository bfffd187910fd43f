//! Typed API wrapper for application services.
//!
//! Application services are generic over an `ApiPort` trait that is not
//! object-safe (generic methods). The composition root stores an object-safe
//! port implementation (so UI and services don't depend on adapter types).
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and implements the typed `ApiPort`
//! interface via serde_json conversions.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;

    #[tokio::test]
    async fn decodes_typed_responses() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/states")
            .returning(|_| Ok(json!(["Alabama", "Alaska"])));

        let api = Api::new(Arc::new(mock));
        let states: Vec<String> = api.get("/states").await.unwrap();

        assert_eq!(states, vec!["Alabama".to_string(), "Alaska".to_string()]);
    }

    #[tokio::test]
    async fn shape_mismatch_becomes_a_parse_error() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Ok(json!({ "unexpected": "object" })));

        let api = Api::new(Arc::new(mock));
        let result: Result<Vec<String>, ApiError> = api.get("/states").await;

        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Err(ApiError::RequestFailed("connection refused".into())));

        let api = Api::new(Arc::new(mock));
        let result: Result<Vec<String>, ApiError> = api.get("/states").await;

        assert_eq!(
            result,
            Err(ApiError::RequestFailed("connection refused".into()))
        );
    }
}
