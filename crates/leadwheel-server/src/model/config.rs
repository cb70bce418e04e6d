//! Configuration management for Leadwheel server
//!
//! Sources, lowest precedence first: `conf/application.yml` (optional),
//! `LEADWHEEL_*` environment variables (`__` separates nested keys, so
//! `LEADWHEEL_STORAGE__PATH` sets `storage.path`), then command line flags.

use std::path::PathBuf;

use clap::Parser;
use config::{Config, Environment};
use leadwheel_persistence::StorageMode;

use crate::startup::{LogFormat, LogRotation, LoggingConfig};

use super::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_LOGS_PATH, DEFAULT_METRICS_PORT,
    DEFAULT_SERVER_ADDRESS, DEFAULT_SERVER_PORT, DEFAULT_STATIC_DIR, DEFAULT_STORAGE_PATH,
    ENV_PREFIX, LOGS_CONSOLE_PROPERTY, LOGS_FILE_PROPERTY, LOGS_FORMAT_PROPERTY,
    LOGS_LEVEL_PROPERTY, LOGS_PATH_PROPERTY, LOGS_ROTATION_PROPERTY, METRICS_ENABLED_PROPERTY,
    METRICS_PORT_PROPERTY, PRIZE_SEED_PROPERTY, SERVER_ADDRESS_PROPERTY, SERVER_PORT_PROPERTY,
    STATIC_DIR_PROPERTY, STORAGE_MODE_PROPERTY, STORAGE_PATH_PROPERTY,
};

/// Command line arguments for the server
#[derive(Debug, Default, Parser)]
#[command(name = "leadwheel-server", about = "Lead capture and prize wheel service")]
pub struct Cli {
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,
    #[arg(long = "storage-mode")]
    pub storage_mode: Option<String>,
    #[arg(long = "storage-path")]
    pub storage_path: Option<String>,
    #[arg(long = "static-dir")]
    pub static_dir: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    /// Load configuration using the process command line
    pub fn new() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(args: Cli) -> anyhow::Result<Self> {
        let mut config_builder = Config::builder()
            .add_source(config::File::with_name(&args.config_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(v) = args.port {
            config_builder = config_builder.set_override(SERVER_PORT_PROPERTY, i64::from(v))?;
        }
        if let Some(v) = args.storage_mode {
            config_builder = config_builder.set_override(STORAGE_MODE_PROPERTY, v)?;
        }
        if let Some(v) = args.storage_path {
            config_builder = config_builder.set_override(STORAGE_PATH_PROPERTY, v)?;
        }
        if let Some(v) = args.static_dir {
            config_builder = config_builder.set_override(STATIC_DIR_PROPERTY, v)?;
        }

        Ok(Configuration {
            config: config_builder.build()?,
        })
    }

    /// Wrap an already built configuration
    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS_PROPERTY)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT_PROPERTY)
            .ok()
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    // ========================================================================
    // Storage Configuration
    // ========================================================================

    pub fn storage_mode(&self) -> anyhow::Result<StorageMode> {
        match self.config.get_string(STORAGE_MODE_PROPERTY) {
            Ok(v) => Ok(v.parse()?),
            Err(_) => Ok(StorageMode::default()),
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.config
            .get_string(STORAGE_PATH_PROPERTY)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH))
    }

    pub fn static_dir(&self) -> PathBuf {
        self.config
            .get_string(STATIC_DIR_PROPERTY)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR))
    }

    /// Fixed seed for the prize wheel; unset means OS entropy
    pub fn prize_seed(&self) -> Option<u64> {
        self.config
            .get_int(PRIZE_SEED_PROPERTY)
            .ok()
            .and_then(|v| u64::try_from(v).ok())
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        let log_dir = self
            .config
            .get_string(LOGS_PATH_PROPERTY)
            .unwrap_or(DEFAULT_LOGS_PATH.to_string());
        let console_output = self.config.get_bool(LOGS_CONSOLE_PROPERTY).unwrap_or(true);
        let file_logging = self.config.get_bool(LOGS_FILE_PROPERTY).unwrap_or(false);
        let level = self
            .config
            .get_string(LOGS_LEVEL_PROPERTY)
            .unwrap_or(DEFAULT_LOG_LEVEL.to_string());
        let format = self
            .config
            .get_string(LOGS_FORMAT_PROPERTY)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LogFormat::Text);
        let rotation = self
            .config
            .get_string(LOGS_ROTATION_PROPERTY)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LogRotation::Daily);

        LoggingConfig::from_config(
            log_dir,
            console_output,
            file_logging,
            level,
            format,
            rotation,
        )
    }

    // ========================================================================
    // Metrics Configuration
    // ========================================================================

    pub fn metrics_enabled(&self) -> bool {
        self.config
            .get_bool(METRICS_ENABLED_PROPERTY)
            .unwrap_or(false)
    }

    pub fn metrics_port(&self) -> u16 {
        self.config
            .get_int(METRICS_PORT_PROPERTY)
            .ok()
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(DEFAULT_METRICS_PORT)
    }
}
