//! Mock platform implementations for tests
//!
//! In-memory, deterministic providers. Sleep resolves immediately so tests
//! never wait on real timers.

use crate::ports::outbound::platform::{
    DocumentProvider, LogProvider, SleepProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

/// Fixed-clock time provider
#[derive(Clone)]
pub struct MockTimeProvider {
    now_secs: u64,
}

impl MockTimeProvider {
    pub fn at(now_secs: u64) -> Self {
        Self { now_secs }
    }
}

impl Default for MockTimeProvider {
    fn default() -> Self {
        Self::at(1_700_000_000)
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        self.now_secs
    }
}

/// Sleep provider that resolves immediately
#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(std::future::ready(()))
    }
}

/// In-memory storage provider
///
/// Clones share the same map, so a test can keep a handle to prime or
/// inspect what the code under test stored.
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MockStorageProvider {
    /// Snapshot of the stored value for a key.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.remove(key);
        }
    }
}

/// Recording log provider
#[derive(Clone, Default)]
pub struct MockLogProvider {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MockLogProvider {
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn record(&self, level: &str, msg: &str) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(format!("{level}: {msg}"));
        }
    }
}

impl LogProvider for MockLogProvider {
    fn info(&self, msg: &str) {
        self.record("info", msg);
    }

    fn error(&self, msg: &str) {
        self.record("error", msg);
    }

    fn debug(&self, msg: &str) {
        self.record("debug", msg);
    }

    fn warn(&self, msg: &str) {
        self.record("warn", msg);
    }
}

/// Recording document provider
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    last_title: Arc<Mutex<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn last_title(&self) -> Option<String> {
        self.last_title
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.last_title.lock() {
            *guard = Some(title.to_string());
        }
    }
}

/// Create a fully mocked platform with default providers
pub fn create_mock_platform() -> Platform {
    Platform::new(
        MockTimeProvider::default(),
        MockSleepProvider,
        MockStorageProvider::default(),
        MockLogProvider::default(),
        MockDocumentProvider::default(),
    )
}
