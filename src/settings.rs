// src/settings.rs
// Storage-decoupled persistence for `Config`. The core never talks to
// localStorage or disk; the host supplies a `SettingsStore` and the merge
// policy lives here.

use crate::config::{flags, Config};
use std::collections::HashMap;

/// Fixed key under which blob-backed hosts persist the whole settings
/// document.
pub const SETTINGS_KEY: &str = "setting";

/// Per-flag key/value storage. Implementations map to whatever the host
/// has (localStorage, a config file, an in-memory map).
pub trait SettingsStore {
    /// `None` means the flag was never persisted (or the backing blob was
    /// corrupt and discarded).
    fn get(&self, flag: &str) -> Option<bool>;
    fn set(&mut self, flag: &str, value: bool);
}

impl Config {
    /// Load settings, falling back per-flag to `fallback` (the live UI
    /// control states at init time), then persist the merged result so
    /// the store is complete going forward.
    pub fn load_or_init(store: &mut dyn SettingsStore, fallback: Config) -> Config {
        let mut merged = fallback;
        for name in flags::ALL {
            if let Some(v) = store.get(name) {
                merged.set(name, v);
            }
        }
        for name in flags::ALL {
            if let Some(v) = merged.get(name) {
                store.set(name, v);
            }
        }
        merged
    }
}

/// In-memory store, used by tests and as a scratch store for hosts that
/// persist the blob themselves via `Config::{from_json,to_json}`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, flag: &str) -> Option<bool> {
        self.values.get(flag).copied()
    }

    fn set(&mut self, flag: &str, value: bool) {
        self.values.insert(flag.to_owned(), value);
    }
}
