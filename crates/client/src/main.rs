//! MedFind client - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medfind_client::ports::outbound::{storage_keys, PlatformPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medfind_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting MedFind");

    // Platform
    let platform = medfind_client::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // HTTP
    let base_url = api_base_url(platform.as_ref());
    tracing::info!("Using API base URL {base_url}");
    let raw_api = std::sync::Arc::new(
        medfind_client::infrastructure::http_client::HttpApiAdapter::new(&base_url),
    );
    let api = medfind_client::application::api::Api::new(raw_api);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_app_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform.clone())
        .with_context(medfind_client::presentation::Services::new(api, platform))
        .launch(medfind_client::app);
}

/// Resolve the backend base URL.
/// Prefer the env var on native builds; fall back to a stored override, then the default.
fn api_base_url(platform: &dyn PlatformPort) -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("MEDFIND_API_URL") {
        if !url.trim().is_empty() {
            return url;
        }
    }

    platform
        .storage_load(storage_keys::API_BASE_URL)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| {
            medfind_client::infrastructure::http_client::DEFAULT_API_BASE_URL.to_string()
        })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_app_css() -> String {
    const FALLBACK_CSS: &str = "";

    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    let css_path = repo_root.join("crates/client/assets/main.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
