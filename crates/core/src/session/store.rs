//! Token storage

use crate::error::{CoreError, CoreResult};
use std::sync::RwLock;

/// Persistent home of the single bearer token
///
/// `set` overwrites unconditionally and `clear` is idempotent. A store that
/// cannot be read reports the token as absent.
pub trait TokenStore: Send + Sync {
    /// Current token, if any
    fn get(&self) -> Option<String>;

    /// Replace the stored token
    fn set(&self, token: &str) -> CoreResult<()>;

    /// Remove the stored token
    fn clear(&self) -> CoreResult<()>;
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    fn set(&self, token: &str) -> CoreResult<()> {
        let mut slot = self
            .token
            .write()
            .map_err(|_| CoreError::storage("token lock poisoned"))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        let mut slot = self
            .token
            .write()
            .map_err(|_| CoreError::storage("token lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}
