use std::cell::RefCell;
use std::rc::Rc;
use futures::future::LocalBoxFuture;
use crate::storage::{ MemoryStore, PreferenceStore, StorageResult };

/// Memory-backed store that remembers every write it was asked to make,
/// including ones that have not been polled yet.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub inner: MemoryStore,
    pub writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn last_write(&self) -> Option<(String, String)> {
        self.writes.borrow().last().cloned()
    }
}

impl PreferenceStore for RecordingStore {
    fn get_item(&self, key: &str) -> LocalBoxFuture<'static, StorageResult<Option<String>>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> LocalBoxFuture<'static, StorageResult<()>> {
        self.writes.borrow_mut().push((key.to_string(), value.to_string()));
        self.inner.set_item(key, value)
    }
}
