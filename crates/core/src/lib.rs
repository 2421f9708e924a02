//! Job board client core: token validation, session guard and shared types

pub mod config;
pub mod error;
pub mod session;
pub mod token;
pub mod types;

pub use config::SessionConfig;
pub use error::{CoreError, CoreResult};
pub use session::{
    ExpiryReason, MemoryTokenStore, Navigator, SessionError, SessionGuard, TokenStore,
};
pub use token::{TokenStatus, is_expired, is_expired_at};
