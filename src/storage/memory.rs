use std::cell::{ Cell, RefCell };
use std::collections::HashMap;
use std::rc::Rc;
use futures::future::{ FutureExt, LocalBoxFuture };
use crate::error::StorageError;
use super::{ PreferenceStore, StorageResult };

/// In-process store. Clones share the same entries, so a test can keep one
/// handle while the app owns another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    failing: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// While failing, every read and write reports the store as unavailable.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> LocalBoxFuture<'static, StorageResult<Option<String>>> {
        let store = self.clone();
        let key = key.to_string();
        (async move {
            if store.failing.get() {
                return Err(StorageError::Unavailable("memory store is failing".to_string()));
            }
            Ok(store.entry(&key))
        }).boxed_local()
    }

    fn set_item(&self, key: &str, value: &str) -> LocalBoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        let key = key.to_string();
        let value = value.to_string();
        (async move {
            if store.failing.get() {
                return Err(StorageError::Unavailable("memory store is failing".to_string()));
            }
            store.entries.borrow_mut().insert(key, value);
            Ok(())
        }).boxed_local()
    }
}
