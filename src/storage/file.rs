use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };
use futures::future::{ FutureExt, LocalBoxFuture };
use log::{ debug, warn };
use crate::error::StorageError;
use super::{ PreferenceStore, StorageResult };

/// Stores all entries as one JSON object of string values.
///
/// File access is blocking `std::fs` and happens on whichever thread polls
/// the returned future, which in the app is the UI thread.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_entries(path: &Path) -> StorageResult<BTreeMap<String, String>> {
    match fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Preference file {} does not exist yet", path.display());
            Ok(BTreeMap::new())
        }
        Err(e) => Err(e.into()),
    }
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = serde_json::to_string_pretty(entries)?;

    // Swap a complete file into place so a crash never leaves half a document.
    let staging = path.with_extension("tmp");
    fs::write(&staging, serialized)?;
    fs::rename(&staging, path)?;
    Ok(())
}

impl PreferenceStore for FileStore {
    fn get_item(&self, key: &str) -> LocalBoxFuture<'static, StorageResult<Option<String>>> {
        let path = self.path.clone();
        let key = key.to_string();
        (async move {
            let mut entries = read_entries(&path)?;
            Ok(entries.remove(&key))
        }).boxed_local()
    }

    fn set_item(&self, key: &str, value: &str) -> LocalBoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        let key = key.to_string();
        let value = value.to_string();
        (async move {
            // The file belongs to this store alone, so an unreadable one is replaced.
            let mut entries = match read_entries(&path) {
                Ok(entries) => entries,
                Err(StorageError::Serialization(e)) => {
                    warn!("Replacing unreadable preference file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
                Err(e) => return Err(e),
            };
            entries.insert(key, value);
            write_entries(&path, &entries)
        }).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(block_on(store.get_item("@theme_mode")).unwrap(), None);
    }

    #[test]
    fn test_write_creates_parents_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let store = FileStore::new(&path);

        block_on(store.set_item("other", "kept")).unwrap();
        block_on(store.set_item("@theme_mode", "dark")).unwrap();

        assert_eq!(block_on(store.get_item("@theme_mode")).unwrap(), Some("dark".to_string()));
        assert_eq!(block_on(store.get_item("other")).unwrap(), Some("kept".to_string()));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(block_on(store.get_item("k")), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_write_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        block_on(store.set_item("@theme_mode", "dark")).unwrap();
        assert_eq!(block_on(store.get_item("@theme_mode")).unwrap(), Some("dark".to_string()));
    }
}
