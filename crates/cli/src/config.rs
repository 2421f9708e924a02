//! CLI configuration
//!
//! Settings are layered: built-in defaults, then `<data-dir>/config.toml`,
//! then `JOBBOARD_*` environment variables, then command-line flags.

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use jobboard_core::SessionConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONFIG_FILE: &str = "config.toml";

/// Resolved CLI settings
#[derive(Debug, Clone, Deserialize)]
pub struct CliSettings {
    pub api_url: Url,
    /// Request timeout in seconds (0 = none)
    pub timeout_secs: u64,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Values given on the command line
#[derive(Debug, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Data directory: flag, then `JOBBOARD_STATE_DIR`, then the system data dir
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir.unwrap_or_else(|| {
        if let Ok(state_dir) = std::env::var("JOBBOARD_STATE_DIR") {
            PathBuf::from(state_dir)
        } else {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("jobboard")
        }
    })
}

impl CliSettings {
    /// Load settings for `data_dir` from the process environment
    pub fn load(data_dir: &Path, overrides: Overrides) -> Result<Self> {
        Self::load_with_env(data_dir, overrides, None)
    }

    /// Load settings, reading environment variables from `env` when given
    pub fn load_with_env(
        data_dir: &Path,
        overrides: Overrides,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE);
        let session = SessionConfig::default();

        let timeout_override = overrides
            .timeout_secs
            .map(|secs| i64::try_from(secs).unwrap_or(i64::MAX));

        let settings = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("timeout_secs", i64::try_from(DEFAULT_TIMEOUT_SECS)?)?
            .set_default("session.token_key", session.token_key)?
            .set_default("session.login_path", session.login_path)?
            .set_default("session.home_path", session.home_path)?
            .add_source(
                File::from(config_path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("JOBBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .set_override_option("api_url", overrides.api_url)?
            .set_override_option("timeout_secs", timeout_override)?
            .build()
            .with_context(|| format!("Failed to read configuration from {}", config_path.display()))?;

        let settings: Self = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        match self.api_url.scheme() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("api_url must use http or https, got {other}://"),
        }
    }
}
