use futures::future::{ FutureExt, LocalBoxFuture };
use wasm_bindgen::JsValue;
use crate::error::StorageError;
use super::{ PreferenceStore, StorageResult };

/// Browser `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn js_error(error: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", error))
}

fn local_storage() -> StorageResult<web_sys::Storage> {
    let window = web_sys
        ::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
}

impl PreferenceStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> LocalBoxFuture<'static, StorageResult<Option<String>>> {
        let key = key.to_string();
        (async move { local_storage()?.get_item(&key).map_err(js_error) }).boxed_local()
    }

    fn set_item(&self, key: &str, value: &str) -> LocalBoxFuture<'static, StorageResult<()>> {
        let key = key.to_string();
        let value = value.to_string();
        (async move { local_storage()?.set_item(&key, &value).map_err(js_error) }).boxed_local()
    }
}
