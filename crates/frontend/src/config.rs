//! Frontend configuration

use jobboard_core::SessionConfig;
use web_sys::window;

/// Browser session configuration
pub struct FrontendConfig;

impl FrontendConfig {
    /// localStorage key holding the bearer token
    pub const TOKEN_KEY: &'static str = SessionConfig::DEFAULT_TOKEN_KEY;

    /// Page the guard sends expired sessions to
    pub const LOGIN_PATH: &'static str = SessionConfig::DEFAULT_LOGIN_PATH;

    /// Landing page after login when the backend names none
    pub const HOME_PATH: &'static str = "/dashboard";

    pub fn session() -> SessionConfig {
        SessionConfig {
            token_key: Self::TOKEN_KEY.to_string(),
            login_path: Self::LOGIN_PATH.to_string(),
            home_path: Self::HOME_PATH.to_string(),
        }
    }

    /// API origin; the backend serves the app, so this is the page origin
    pub fn base_url() -> Option<String> {
        window()?.location().origin().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_uses_browser_key() {
        let session = FrontendConfig::session();
        assert_eq!(session.token_key, "accessToken");
        assert_eq!(session.login_path, "/login");
        assert_eq!(session.home_path, "/dashboard");
    }
}
