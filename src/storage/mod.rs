//! Key-value persistence for user preferences.
//!
//! Every operation hands back a `'static` future so callers can either await
//! it or detach it without holding a borrow of the store.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

use std::fmt::{ Debug, Formatter };
use std::ops::Deref;
use std::rc::Rc;
use futures::future::LocalBoxFuture;
use crate::error::StorageError;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageStore;
pub use memory::MemoryStore;

/// Key holding the persisted `ThemeMode`. Owned by the theme resolver.
pub const THEME_STORAGE_KEY: &str = "@theme_mode";

pub type StorageResult<T> = Result<T, StorageError>;

pub trait PreferenceStore {
    /// `Ok(None)` when the key has never been written.
    fn get_item(&self, key: &str) -> LocalBoxFuture<'static, StorageResult<Option<String>>>;

    fn set_item(&self, key: &str, value: &str) -> LocalBoxFuture<'static, StorageResult<()>>;
}

/// Cheaply clonable handle to the single process-wide store.
#[derive(Clone)]
pub struct SharedStore(Rc<dyn PreferenceStore>);

impl SharedStore {
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for SharedStore {
    type Target = dyn PreferenceStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl Debug for SharedStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStore").finish_non_exhaustive()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn open_preference_store() -> SharedStore {
    log::info!("Persisting preferences to localStorage");
    SharedStore::new(LocalStorageStore)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_preference_store() -> SharedStore {
    match crate::configs::get_storage_path() {
        Some(path) => {
            log::info!("Persisting preferences to {}", path.display());
            SharedStore::new(FileStore::new(path))
        }
        None => {
            log::warn!("No storage location available, preferences will not survive a restart");
            SharedStore::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_store_equality_is_identity() {
        let a = SharedStore::new(MemoryStore::new());
        let b = SharedStore::new(MemoryStore::new());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
