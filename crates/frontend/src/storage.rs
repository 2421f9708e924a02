//! localStorage-backed token store

use jobboard_core::{CoreError, CoreResult, TokenStore};
use tracing::warn;
use web_sys::{Storage, window};

/// Keeps the bearer token under one localStorage key
///
/// The storage handle is looked up on every call, so the store stays
/// `Send + Sync` and a blocked storage reads as "no token".
#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> CoreResult<Storage> {
        window()
            .ok_or_else(|| CoreError::storage("no window"))?
            .local_storage()
            .map_err(|e| CoreError::storage(format!("localStorage unavailable: {e:?}")))?
            .ok_or_else(|| CoreError::storage("localStorage disabled"))
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(&self.key).ok().flatten(),
            Err(e) => {
                warn!("Cannot read token: {e}");
                None
            }
        }
    }

    fn set(&self, token: &str) -> CoreResult<()> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|e| CoreError::storage(format!("failed to save token: {e:?}")))
    }

    fn clear(&self) -> CoreResult<()> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| CoreError::storage(format!("failed to remove token: {e:?}")))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn round_trip_and_clear() {
        let store = LocalStorageTokenStore::new("jobboard-test-token");
        store.clear().unwrap();
        assert_eq!(store.get(), None);

        store.set("first").unwrap();
        store.set("second").unwrap();
        assert_eq!(store.get().as_deref(), Some("second"));

        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }
}
