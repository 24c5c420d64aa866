//! # Client Storage
//!
//! Persistence adapter for published content and the admin session flag.
//!
//! Two scopes exist:
//! - **Local**: content keys, kept indefinitely on the client
//! - **Session**: the admin flag, cleared when the tab session ends
//!
//! All calls are synchronous and best-effort. Callers log failures and carry
//! on; nothing here is ever fatal.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Lifetime of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    Local,
    Session,
}

/// Key/value client storage abstraction
pub trait ContentStorage {
    /// Read a value; `None` when missing or unreadable
    fn load(&self, scope: StorageScope, key: &str) -> Option<String>;

    /// Write a value
    fn save(&mut self, scope: StorageScope, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value (missing keys are fine)
    fn remove(&mut self, scope: StorageScope, key: &str);
}

/// In-memory storage for tests and headless rendering
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<(StorageScope, String), String>,
    /// When set, every `save` fails with `Unavailable`
    pub fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly
    pub fn insert(&mut self, scope: StorageScope, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert((scope, key.into()), value.into());
    }

    pub fn get(&self, scope: StorageScope, key: &str) -> Option<&str> {
        self.entries.get(&(scope, key.to_string())).map(String::as_str)
    }

    /// Drop all session-scoped values, as closing the tab would
    pub fn end_session(&mut self) {
        self.entries.retain(|(scope, _), _| *scope != StorageScope::Session);
    }
}

impl ContentStorage for MemoryStorage {
    fn load(&self, scope: StorageScope, key: &str) -> Option<String> {
        self.get(scope, key).map(str::to_string)
    }

    fn save(&mut self, scope: StorageScope, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        self.insert(scope, key, value);
        Ok(())
    }

    fn remove(&mut self, scope: StorageScope, key: &str) {
        self.entries.remove(&(scope, key.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scopes_are_separate() {
        let mut storage = MemoryStorage::new();
        storage.save(StorageScope::Local, "k", "local").unwrap();
        storage.save(StorageScope::Session, "k", "session").unwrap();

        assert_eq!(storage.load(StorageScope::Local, "k").as_deref(), Some("local"));
        assert_eq!(storage.load(StorageScope::Session, "k").as_deref(), Some("session"));

        storage.end_session();
        assert_eq!(storage.load(StorageScope::Local, "k").as_deref(), Some("local"));
        assert_eq!(storage.load(StorageScope::Session, "k"), None);
    }

    #[test]
    fn test_failed_writes_leave_previous_value() {
        let mut storage = MemoryStorage::new();
        storage.insert(StorageScope::Local, "k", "old");
        storage.fail_writes = true;

        assert!(storage.save(StorageScope::Local, "k", "new").is_err());
        assert_eq!(storage.get(StorageScope::Local, "k"), Some("old"));
    }
}
