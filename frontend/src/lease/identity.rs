use std::fmt;

use uuid::Uuid;

use super::error::StorageError;
use crate::config::USER_ID_STORAGE_KEY;

/// Anonymous identifier correlating one browser profile's requests.
///
/// Empty when client storage could not be used; flows that need an identity
/// refuse to run in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => Err(StorageError::Access(format!("{:?}", e))),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// Returns the stored identity, creating and persisting a new one if none is stored.
pub fn load_or_create(storage: &impl KeyValueStore) -> Result<ClientIdentity, StorageError> {
    let stored = storage
        .get_item(USER_ID_STORAGE_KEY)?
        .filter(|value| !value.trim().is_empty());
    if let Some(existing) = stored {
        return Ok(ClientIdentity(existing));
    }
    let fresh = Uuid::new_v4().to_string();
    storage.set_item(USER_ID_STORAGE_KEY, &fresh)?;
    log::info!("Created new client identity");
    Ok(ClientIdentity(fresh))
}

/// Runs once when the page mounts. Never fails: storage problems degrade to an
/// empty identity.
pub fn bootstrap_identity<S: KeyValueStore>(storage: Result<S, StorageError>) -> ClientIdentity {
    match storage.and_then(|storage| load_or_create(&storage)) {
        Ok(identity) => identity,
        Err(e) => {
            log::warn!("Client identity unavailable: {}", e);
            ClientIdentity::default()
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    /// In-memory store; clones share the same map, like two page loads sharing localStorage.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        items: Rc<RefCell<HashMap<String, String>>>,
        pub fail_writes: bool,
    }

    impl MemoryStorage {
        pub fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        /// Reads succeed but every write fails, like a full or locked-down localStorage.
        pub fn read_only() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.get(key))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Access("QuotaExceededError".to_string()));
            }
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryStorage;
    use super::*;

    #[test]
    fn empty_storage_generates_and_persists() {
        let storage = MemoryStorage::default();
        let identity = bootstrap_identity(Ok(storage.clone()));
        assert!(!identity.is_empty());
        assert!(Uuid::parse_str(identity.as_str()).is_ok());
        assert_eq!(
            storage.get(USER_ID_STORAGE_KEY).as_deref(),
            Some(identity.as_str())
        );
    }

    #[test]
    fn reload_returns_same_identity() {
        let storage = MemoryStorage::default();
        let first = bootstrap_identity(Ok(storage.clone()));
        let second = bootstrap_identity(Ok(storage.clone()));
        assert_eq!(first, second);
    }

    #[test]
    fn stored_value_is_used_verbatim() {
        let storage = MemoryStorage::with(USER_ID_STORAGE_KEY, "U1");
        assert_eq!(bootstrap_identity(Ok(storage)).as_str(), "U1");
    }

    #[test]
    fn blank_stored_value_is_replaced() {
        let storage = MemoryStorage::with(USER_ID_STORAGE_KEY, "  ");
        let identity = bootstrap_identity(Ok(storage.clone()));
        assert!(!identity.as_str().trim().is_empty());
        assert_eq!(
            storage.get(USER_ID_STORAGE_KEY).as_deref(),
            Some(identity.as_str())
        );
    }

    #[test]
    fn unavailable_storage_degrades_to_empty() {
        let identity = bootstrap_identity::<MemoryStorage>(Err(StorageError::Unavailable));
        assert!(identity.is_empty());

        let read_only = MemoryStorage::read_only();
        assert!(bootstrap_identity(Ok(read_only.clone())).is_empty());
        assert_eq!(read_only.get(USER_ID_STORAGE_KEY), None);
    }
}
