//! Session guard
//!
//! Runs before any authenticated page logic. A missing, expired or
//! undecodable token is evicted and the user is sent to the login entry
//! point; the caller must stop once that happens.

use super::store::TokenStore;
use crate::config::SessionConfig;
use crate::error::CoreResult;
use crate::token::{self, TokenStatus};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Performs full-page navigation
pub trait Navigator: Send + Sync {
    /// Leave the current page for `target`
    fn navigate(&self, target: &str);
}

/// Why a session was ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryReason {
    /// No token in storage
    Missing,
    /// The `exp` claim is in the past
    Expired,
    /// The token could not be decoded
    Malformed,
    /// The backend answered 401
    Unauthorized,
}

impl fmt::Display for ExpiryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Missing => "no token",
            Self::Expired => "token expired",
            Self::Malformed => "token unreadable",
            Self::Unauthorized => "rejected by server",
        };
        f.write_str(text)
    }
}

/// Raised when the page must stop because the session is gone
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session expired: {reason}")]
    Expired { reason: ExpiryReason },
}

impl SessionError {
    pub fn reason(&self) -> ExpiryReason {
        match self {
            Self::Expired { reason } => *reason,
        }
    }
}

struct GuardInner {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    config: SessionConfig,
    navigated: AtomicBool,
}

/// The one owner of session state
#[derive(Clone)]
pub struct SessionGuard {
    inner: Arc<GuardInner>,
}

impl fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGuard")
            .field("config", &self.inner.config)
            .field("navigated", &self.has_navigated())
            .finish_non_exhaustive()
    }
}

impl SessionGuard {
    pub fn new(
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        config: SessionConfig,
    ) -> Self {
        Self {
            inner: Arc::new(GuardInner {
                store,
                navigator,
                config,
                navigated: AtomicBool::new(false),
            }),
        }
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    /// Whether a token exists and is unexpired right now; no side effects
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .store
            .get()
            .is_some_and(|token| !token::is_expired(&token))
    }

    /// Whether this guard has already sent the user elsewhere
    pub fn has_navigated(&self) -> bool {
        self.inner.navigated.load(Ordering::SeqCst)
    }

    /// Check the stored token, evicting it and redirecting to login if unusable
    pub fn ensure_valid_session(&self) -> Result<(), SessionError> {
        let reason = match self.inner.store.get() {
            None => ExpiryReason::Missing,
            Some(token) => match token::inspect(&token, token::now_millis()) {
                TokenStatus::Valid { expires_at } => {
                    debug!(expires_at, "Session valid");
                    return Ok(());
                }
                TokenStatus::Expired { expires_at } => {
                    debug!(expires_at, "Stored token has expired");
                    ExpiryReason::Expired
                }
                TokenStatus::Malformed(cause) => {
                    warn!(%cause, "Stored token is unreadable");
                    ExpiryReason::Malformed
                }
            },
        };

        Err(self.expire_session(reason))
    }

    /// Clear the token and redirect to login
    ///
    /// Shared by local expiry and 401 responses. Only the first call
    /// navigates; later calls still clear storage.
    pub fn expire_session(&self, reason: ExpiryReason) -> SessionError {
        if let Err(e) = self.inner.store.clear() {
            warn!("Failed to clear token: {e}");
        }

        if self.inner.navigated.swap(true, Ordering::SeqCst) {
            debug!(%reason, "Redirect already issued");
        } else {
            info!(%reason, login = %self.inner.config.login_path, "Session ended, redirecting to login");
            self.inner.navigator.navigate(&self.inner.config.login_path);
        }

        SessionError::Expired { reason }
    }

    /// Store a freshly issued token and go to the post-login page
    pub fn establish(&self, token: &str, redirect_url: Option<&str>) -> CoreResult<()> {
        self.inner.store.set(token)?;

        let target = redirect_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(&self.inner.config.home_path);
        info!(%target, "Session established");
        self.inner.navigated.store(true, Ordering::SeqCst);
        self.inner.navigator.navigate(target);
        Ok(())
    }

    /// Log out: drop the token and return to login
    pub fn sign_out(&self) -> CoreResult<()> {
        self.inner.store.clear()?;
        info!("Signed out");
        self.inner.navigated.store(true, Ordering::SeqCst);
        self.inner.navigator.navigate(&self.inner.config.login_path);
        Ok(())
    }
}

/// Navigator that records targets instead of leaving the page
#[cfg(any(test, feature = "tests"))]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: std::sync::Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "tests"))]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every target navigated to, oldest first
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.visits().pop()
    }
}

#[cfg(any(test, feature = "tests"))]
impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        if let Ok(mut visits) = self.visits.lock() {
            visits.push(target.to_string());
        }
    }
}
