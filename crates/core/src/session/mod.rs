//! Session state: token storage and the guard that polices it

pub mod guard;
pub mod store;

pub use guard::{ExpiryReason, Navigator, SessionError, SessionGuard};
pub use store::{MemoryTokenStore, TokenStore};

#[cfg(any(test, feature = "tests"))]
pub use guard::RecordingNavigator;
