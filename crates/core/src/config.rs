//! Session configuration

use serde::{Deserialize, Serialize};

/// Where the session lives and where the guard sends the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Storage key holding the bearer token
    pub token_key: String,
    /// Login entry point used on an invalid session
    pub login_path: String,
    /// Landing page when the backend does not name one after login
    pub home_path: String,
}

impl SessionConfig {
    pub const DEFAULT_TOKEN_KEY: &'static str = "accessToken";
    pub const DEFAULT_LOGIN_PATH: &'static str = "/login";
    pub const DEFAULT_HOME_PATH: &'static str = "/";
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: Self::DEFAULT_TOKEN_KEY.to_string(),
            login_path: Self::DEFAULT_LOGIN_PATH.to_string(),
            home_path: Self::DEFAULT_HOME_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"login_path": "/signin"}"#).unwrap();
        assert_eq!(config.login_path, "/signin");
        assert_eq!(config.token_key, "accessToken");
        assert_eq!(config.home_path, "/");
    }
}
