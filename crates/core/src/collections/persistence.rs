//! Durable key-value storage behind the collection store.
//!
//! Adapters store raw strings. Encoding the collections is the store's job,
//! so an adapter never needs to know what it is holding.

use std::collections::HashMap;

use thiserror::Error;

/// Keys the three collections are stored under.
pub mod keys {
    /// Key for bookmarked shoots.
    pub const BOOKMARKS: &str = "nedge-bookmarks";

    /// Key for followed stylists.
    pub const FOLLOWING: &str = "nedge-following";

    /// Key for saved wardrobe items.
    pub const WARDROBE: &str = "nedge-my-wardrobe";

    /// All keys, in the order the store writes them.
    pub const ALL: [&str; 3] = [BOOKMARKS, FOLLOWING, WARDROBE];
}

/// Errors an adapter can report from a write.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The backing store cannot be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Writing a key failed.
    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A collection could not be encoded.
    #[error("failed to encode collection: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A durable string store keyed by name.
pub trait PersistenceAdapter {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Whether this adapter is backed by anything durable.
    ///
    /// The store skips reads and writes entirely when this is `false`.
    fn is_available(&self) -> bool {
        true
    }
}

impl<T: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<T> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).save(key, value)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// Adapter for environments with no durable storage.
///
/// Loads nothing and drops every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPersistence;

impl PersistenceAdapter for NoopPersistence {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// In-process adapter backed by a `HashMap`.
///
/// Cloning it snapshots the stored values, which is how a second store
/// instance can be hydrated from what the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryPersistence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if an earlier session had written it.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// The raw value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of `save` calls received.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl PersistenceAdapter for MemoryPersistence {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.writes += 1;
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_is_unavailable_and_empty() {
        let mut adapter = NoopPersistence;
        assert!(!adapter.is_available());
        assert!(adapter.save(keys::BOOKMARKS, "[]").is_ok());
        assert_eq!(adapter.load(keys::BOOKMARKS), None);
    }

    #[test]
    fn test_memory_save_then_load() {
        let mut adapter = MemoryPersistence::new();
        assert_eq!(adapter.load(keys::FOLLOWING), None);

        assert!(adapter.save(keys::FOLLOWING, "[1]").is_ok());
        assert_eq!(adapter.load(keys::FOLLOWING).as_deref(), Some("[1]"));
        assert_eq!(adapter.writes(), 1);
    }

    #[test]
    fn test_boxed_adapter_delegates() {
        let mut adapter: Box<dyn PersistenceAdapter> = Box::new(NoopPersistence);
        assert!(!adapter.is_available());
        assert!(adapter.save(keys::WARDROBE, "[]").is_ok());
    }

    #[test]
    fn test_keys_are_distinct() {
        assert_ne!(keys::BOOKMARKS, keys::FOLLOWING);
        assert_ne!(keys::FOLLOWING, keys::WARDROBE);
        assert_ne!(keys::BOOKMARKS, keys::WARDROBE);
    }
}
