//! Shared components

pub mod nav_bar;
pub mod require_session;
pub mod spinner;

pub use nav_bar::NavBar;
pub use require_session::RequireSession;
pub use spinner::LoadingSpinner;
