//! `localStorage` behind the core [`KeyValueStore`] seam.
use promo_core::{KeyValueStore, StorageError};

/// Browser-backed store. Reads from a missing `localStorage` (private mode,
/// server rendering) yield nothing; writes report [`StorageError::Unavailable`].
#[derive(Clone, Default)]
pub struct BrowserStore {
    #[cfg(target_arch = "wasm32")]
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    #[must_use]
    pub fn open() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
            if storage.is_none() {
                log::warn!("localStorage unavailable; preferences will not persist");
            }
            Self { storage }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.storage.is_some()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }
}

impl PartialEq for BrowserStore {
    fn eq(&self, other: &Self) -> bool {
        self.is_available() == other.is_available()
    }
}

#[cfg(target_arch = "wasm32")]
fn backend_error(key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend {
        key: key.to_string(),
        reason: crate::dom::js_error_message(err),
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            match &self.storage {
                Some(storage) => storage.get_item(key).map_err(|err| backend_error(key, &err)),
                None => Ok(None),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| backend_error(key, &err))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|err| backend_error(key, &err))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use promo_core::{ConsentPreferences, is_remembered, keys};

    #[test]
    fn host_store_reads_nothing_and_refuses_writes() {
        let store = BrowserStore::open();
        assert!(!store.is_available());
        assert_eq!(store.get_item(keys::AGE_VERIFIED).unwrap(), None);
        assert!(matches!(
            store.set_item(keys::AGE_VERIFIED, "true"),
            Err(StorageError::Unavailable)
        ));
        assert!(!is_remembered(&store));
        assert_eq!(
            ConsentPreferences::load(&store),
            ConsentPreferences::default()
        );
    }
}
