//! Typed access to client-local key-value storage.
use crate::entry::EntryFormData;
use crate::promotion::Promotion;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Storage keys shared with the rest of the site.
pub mod keys {
    pub const AGE_VERIFIED: &str = "ageVerified";
    pub const COOKIE_CONSENT: &str = "cookieConsent";
    pub const LAST_SUBMISSION: &str = "lastSubmission";
    pub const FAILED_SUBMISSION: &str = "failedSubmission";
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage backend rejected `{key}`: {reason}")]
    Backend { key: String, reason: String },
    #[error("stored value could not be (de)serialized: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value store in the shape of the browser's `localStorage`.
///
/// Writes are last-writer-wins; there is no locking.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Read and decode a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored JSON does not match `T`.
    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.get_item(key)?
            .map(|raw| serde_json::from_str(&raw).map_err(StorageError::from))
            .transpose()
    }

    /// Encode and store a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw)
    }
}

/// In-process store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Backup of the last accepted entry, stored under [`keys::LAST_SUBMISSION`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub form_data: EntryFormData,
    pub api_response: Value,
    pub submitted_at: String,
    pub promotion: Option<Promotion>,
}

/// Backup of the last rejected entry, stored under [`keys::FAILED_SUBMISSION`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedSubmission {
    pub form_data: EntryFormData,
    pub error: String,
    pub timestamp: String,
    pub promotion: Option<Promotion>,
}
