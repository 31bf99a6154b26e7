//! Durable key/value storage for the persisted session.
//!
//! The browser keeps the pair in `localStorage`, native builds keep it in a
//! small JSON file. [`MemoryStorage`] backs tests and is the fallback when the
//! browser refuses storage access (private windows, disabled cookies).

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use dioxus_logger::tracing;

use crate::client::{config::Config, error::StorageError};

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The durable storage for the current platform
pub fn platform_storage(config: &Config) -> Rc<dyn KeyValueStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;

        match browser::LocalStorage::new() {
            Ok(storage) => Rc::new(storage),
            Err(e) => {
                tracing::warn!("Falling back to in-memory session storage: {}", e);
                Rc::new(MemoryStorage::new())
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(path = %config.session_file.display(), "Using file session storage");
        Rc::new(file::FileStorage::new(config.session_file.clone()))
    }
}

#[cfg(target_arch = "wasm32")]
pub mod browser {
    use web_sys::Storage;

    use crate::client::{error::StorageError, session::storage::KeyValueStorage};

    pub struct LocalStorage {
        storage: Storage,
    }

    impl LocalStorage {
        pub fn new() -> Result<Self, StorageError> {
            let storage = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;

            Ok(Self { storage })
        }
    }

    impl KeyValueStorage for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| StorageError::WriteFailed {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.storage
                .remove_item(key)
                .map_err(|e| StorageError::WriteFailed {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod file {
    use std::{collections::BTreeMap, fs, path::PathBuf};

    use dioxus_logger::tracing;

    use crate::client::{error::StorageError, session::storage::KeyValueStorage};

    /// Entries kept as one JSON object, rewritten whole on every change
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        pub fn new(path: PathBuf) -> Self {
            Self { path }
        }

        fn read(&self) -> BTreeMap<String, String> {
            let Ok(contents) = fs::read_to_string(&self.path) else {
                return BTreeMap::new();
            };

            serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %self.path.display(),
                    "Ignoring unreadable session file: {}",
                    e
                );
                BTreeMap::new()
            })
        }

        fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
            if entries.is_empty() {
                if self.path.exists() {
                    fs::remove_file(&self.path)?;
                }
                return Ok(());
            }

            fs::write(&self.path, serde_json::to_string(entries)?)?;
            Ok(())
        }
    }

    impl KeyValueStorage for FileStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.read().remove(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.read();
            entries.insert(key.to_string(), value.to_string());
            self.write(&entries)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            let mut entries = self.read();
            if entries.remove(key).is_some() {
                self.write(&entries)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::FileStorage;
        use crate::client::session::storage::KeyValueStorage;

        fn temp_path(name: &str) -> std::path::PathBuf {
            std::env::temp_dir().join(format!("chuflay-{}-{}.json", name, std::process::id()))
        }

        #[test]
        /// Expect values to survive a new storage instance on the same file
        fn test_file_storage_persists_between_instances() {
            let path = temp_path("persist");
            let storage = FileStorage::new(path.clone());

            storage.set("chuflay:token", "abc").unwrap();

            let reopened = FileStorage::new(path.clone());
            assert_eq!(reopened.get("chuflay:token").as_deref(), Some("abc"));

            reopened.remove("chuflay:token").unwrap();
            assert!(!path.exists());
        }

        #[test]
        /// Expect a corrupted file to read as empty rather than fail
        fn test_file_storage_corrupted_file() {
            let path = temp_path("corrupted");
            std::fs::write(&path, "not json").unwrap();

            let storage = FileStorage::new(path.clone());
            assert!(storage.get("chuflay:token").is_none());

            storage.set("chuflay:token", "abc").unwrap();
            assert_eq!(storage.get("chuflay:token").as_deref(), Some("abc"));

            std::fs::remove_file(&path).unwrap();
        }
    }
}
