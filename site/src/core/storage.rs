//! Persistence for the single saved preference (the language code).

use std::cell::{Cell, RefCell};

use crate::error::{Result, SiteError};

/// One string slot in an origin-scoped durable store.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, value: &str) -> Result<()>;
}

/// In-process store; counts writes so callers can assert on persistence.
#[derive(Debug)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
    writes: Cell<usize>,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            value: RefCell::new(None),
            writes: Cell::new(0),
            available: true,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let store = Self::default();
        store.value.replace(Some(value.to_string()));
        store
    }

    /// A store that fails every call, like `localStorage` in a locked-down
    /// private window.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.available {
            return Err(SiteError::StorageUnavailable);
        }
        Ok(self.value())
    }

    fn save(&self, value: &str) -> Result<()> {
        if !self.available {
            return Err(SiteError::StorageUnavailable);
        }
        self.value.replace(Some(value.to_string()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// `window.localStorage` under a fixed key.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or(SiteError::StorageUnavailable)?
            .local_storage()
            .map_err(|_| SiteError::StorageUnavailable)?
            .ok_or(SiteError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn load(&self) -> Result<Option<String>> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|err| SiteError::Storage(format!("{err:?}")))
    }

    fn save(&self, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(&self.key, value)
            .map_err(|err| SiteError::Storage(format!("{err:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_overwrites_and_counts() {
        let store = MemoryStore::with_value("en");
        store.save("de").unwrap();
        store.save("fr").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("fr"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn unavailable_store_reports_errors() {
        let store = MemoryStore::unavailable();
        assert!(matches!(store.load(), Err(SiteError::StorageUnavailable)));
        assert!(store.save("es").is_err());
        assert_eq!(store.writes(), 0);
    }
}
