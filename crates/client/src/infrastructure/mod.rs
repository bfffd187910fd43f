//! Infrastructure adapters - concrete implementations of outbound ports

pub mod http_client;
pub mod platform;

use std::future::Future;

/// Spawn a UI-bound async task onto the Dioxus runtime.
///
/// Components use this instead of calling `dioxus::prelude::spawn` directly
/// so the spawning strategy stays in one place.
pub fn spawn_task<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(fut);
}
