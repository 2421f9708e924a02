//! Job board CLI

mod commands;
mod config;
mod logging;
mod navigator;
mod render;
mod store;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use config::{CliSettings, Overrides};
use jobboard_core::SessionGuard;
use jobboard_http::{ApiClient, GuardedClient};
use navigator::TerminalNavigator;
use std::sync::Arc;
use std::time::Duration;
use store::FileTokenStore;
use tracing::{Level, error, info};

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Browse jobs, manage applications and post listings")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Data directory for the session token, configuration and logs
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// Backend base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (0 = no timeout)
    #[arg(short = 't', long, global = true)]
    timeout: Option<u64>,

    /// Disable file logging (only log to stderr)
    #[arg(long, global = true)]
    no_file_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = config::resolve_data_dir(cli.data_dir);
    logging::init_logging(cli.log_level.into(), &data_dir, cli.no_file_log)?;

    let settings = CliSettings::load(
        &data_dir,
        Overrides {
            api_url: cli.api_url,
            timeout_secs: cli.timeout,
        },
    )?;
    info!(api_url = %settings.api_url, data_dir = %data_dir.display(), "Starting job board CLI");

    let client = build_client(&settings, &data_dir)?;

    match cli.command.execute(&client).await {
        Ok(()) => {
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {e:#}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn build_client(settings: &CliSettings, data_dir: &std::path::Path) -> Result<GuardedClient> {
    let store = Arc::new(FileTokenStore::new(data_dir, &settings.session.token_key));
    let navigator = Arc::new(TerminalNavigator::new(settings.session.login_path.clone()));

    let mut builder = ApiClient::builder()
        .base_url(settings.api_url.as_str())
        .token_store(store.clone());
    if settings.timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
    }

    let guard = SessionGuard::new(store, navigator, settings.session.clone());
    Ok(GuardedClient::new(builder.build()?, guard))
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_nested_subcommand() {
        let cli = Cli::try_parse_from([
            "jobboard",
            "--api-url",
            "http://localhost:5000",
            "applications",
            "apply",
            "7",
            "--cover-letter",
            "Hello",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:5000"));
        assert!(matches!(
            cli.command,
            Commands::Applications {
                command: commands::ApplicationCommands::Apply { job_id: 7, .. }
            }
        ));
    }
}
