//! Durable key/value storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists the logged-in identity here and the request
//! layer reads the bearer token back on every call. In the browser this is
//! `localStorage`; SSR and native tests see an empty store unless they inject
//! [`MemoryStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Writes and deletes are best-effort. A blocked or full `localStorage` is
//! logged and otherwise ignored so storage trouble never breaks rendering.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Get/set/delete by key. Implementations must be safe to call from any
/// reactive context; none of these calls suspend.
pub trait DurableStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, available only under the `hydrate` feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl DurableStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; {key} not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    leptos::logging::warn!("localStorage delete failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage. Clones share the same entries, so two session stores
/// built over clones of one `MemoryStorage` behave like two page loads in
/// the same browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Load and decode a JSON value stored under `key`.
///
/// `None` when the key is absent; `Some(Err(_))` when the stored text is not
/// valid JSON for `T`, so callers can tell a missing record from a bad one.
pub fn load_json<T, S>(storage: &S, key: &str) -> Option<Result<T, serde_json::Error>>
where
    T: DeserializeOwned,
    S: DurableStorage + ?Sized,
{
    let raw = storage.get(key)?;
    Some(serde_json::from_str(&raw))
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T, S>(storage: &S, key: &str, value: &T)
where
    T: Serialize,
    S: DurableStorage + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(raw) => storage.set(key, &raw),
        Err(e) => leptos::logging::warn!("failed to encode {key}: {e}"),
    }
}
