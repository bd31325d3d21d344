//! Preference store port.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's `localStorage` is synchronous, origin-scoped, and may refuse
//! every call (private browsing, quota, disabled storage). The port surfaces
//! those refusals as [`StoreError`] so callers decide explicitly what to do
//! with them. `MemoryStore` stands in for the browser in native builds.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Failure reported by a [`PreferenceStore`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The host exposes no usable store.
    #[error("preference store unavailable")]
    Unavailable,
    /// The store exists but refused the read.
    #[error("preference read failed: {0}")]
    Read(String),
    /// The store exists but refused the write.
    #[error("preference write failed: {0}")]
    Write(String),
}

/// Synchronous string key-value store.
pub trait PreferenceStore {
    /// Read the value under `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the host refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the host refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Collapse a host's "give me the store" lookup into a store or
/// [`StoreError::Unavailable`].
///
/// Hosts report a missing store either as `Ok(None)` or as an error (access
/// denied in sandboxed frames); both mean no persistence for this page.
///
/// # Errors
///
/// Returns [`StoreError::Unavailable`] unless the lookup produced a store.
pub fn available<T, E: fmt::Debug>(lookup: Result<Option<T>, E>) -> Result<T, StoreError> {
    match lookup {
        Ok(Some(store)) => Ok(store),
        Ok(None) => Err(StoreError::Unavailable),
        Err(err) => {
            log::debug!("preference store access denied: {err:?}");
            Err(StoreError::Unavailable)
        }
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store with switchable failure modes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store that refuses every read and write.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.fail_reads.set(true);
        store.fail_writes.set(true);
        store
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Current value under `key`, bypassing failure modes.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.get() {
            return Err(StoreError::Read("reads disabled".to_owned()));
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Write("writes disabled".to_owned()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
