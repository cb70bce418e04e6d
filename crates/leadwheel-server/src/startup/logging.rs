//! Logging setup with console output and optional rolling log files.
//!
//! | Log File        | Component                     | Target Prefixes                                  |
//! |-----------------|-------------------------------|--------------------------------------------------|
//! | leadwheel.log   | Root logger (all components)  | (all)                                            |
//! | leads.log       | Lead log and lead store       | leadwheel_persistence, leadwheel_server::service |
//! | http.log        | HTTP requests and handlers    | actix_web, leadwheel_server::api                 |
//!
//! Files are written to `logs/` by default and rotate daily. Override with the
//! `logs.path` and `logs.rotation` (`daily`, `hourly`, `never`) config keys.
//! `RUST_LOG` overrides the configured level for the console and root file.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Internal definition for a component log file.
struct ComponentLogDef {
    /// Log file name (e.g. "leads.log")
    file_name: &'static str,
    /// Target module prefixes routed to this file
    targets: &'static [&'static str],
}

const ROOT_LOG_FILE: &str = "leadwheel.log";

const COMPONENT_LOGS: &[ComponentLogDef] = &[
    ComponentLogDef {
        file_name: "leads.log",
        targets: &["leadwheel_persistence", "leadwheel_server::service"],
    },
    ComponentLogDef {
        file_name: "http.log",
        targets: &["actix_web", "leadwheel_server::api"],
    },
];

/// Log rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Daily,
    Hourly,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

impl FromStr for LogRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "hourly" => Ok(Self::Hourly),
            "never" | "none" => Ok(Self::Never),
            _ => Err(format!("Unknown log rotation: {}", s)),
        }
    }
}

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// Bunyan-style JSON, one object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" | "bunyan" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Logging configuration for the entire application.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    pub console_output: bool,
    pub console_level: Level,
    pub format: LogFormat,
    pub file_logging: bool,
    pub file_level: Level,
    pub rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            console_output: true,
            console_level: Level::INFO,
            format: LogFormat::Text,
            file_logging: false,
            file_level: Level::INFO,
            rotation: LogRotation::Daily,
        }
    }
}

impl LoggingConfig {
    /// Create from application configuration.
    pub fn from_config(
        log_dir: String,
        console_output: bool,
        file_logging: bool,
        level: String,
        format: LogFormat,
        rotation: LogRotation,
    ) -> Self {
        let level = level.parse().unwrap_or(Level::INFO);

        Self {
            log_dir: PathBuf::from(log_dir),
            console_output,
            console_level: level,
            format,
            file_logging,
            file_level: level,
            rotation,
        }
    }
}

/// Guard that keeps the file writers alive.
///
/// Must be held for the lifetime of the application; dropping it flushes
/// buffered log output.
pub struct LoggingGuard {
    _file_guards: Vec<WorkerGuard>,
}

/// Initialize the global tracing subscriber.
///
/// Sets up console output (text or bunyan JSON) and, when file logging is
/// enabled, a root `leadwheel.log` plus the component files in
/// [`COMPONENT_LOGS`], routed by tracing target.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, Box<dyn std::error::Error>> {
    if config.file_logging {
        std::fs::create_dir_all(&config.log_dir)?;
    }

    let mut guards: Vec<WorkerGuard> = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.console_output {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.console_level.to_string()));
        match config.format {
            LogFormat::Text => {
                let console_layer = fmt::layer()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_filter(filter);
                layers.push(Box::new(console_layer));
            }
            LogFormat::Json => {
                layers.push(Box::new(JsonStorageLayer));
                let console_layer =
                    BunyanFormattingLayer::new("leadwheel".to_string(), std::io::stdout)
                        .with_filter(filter);
                layers.push(Box::new(console_layer));
            }
        }
    }

    if config.file_logging {
        let root_appender =
            RollingFileAppender::new(config.rotation.into(), &config.log_dir, ROOT_LOG_FILE);
        let (root_nb, root_guard) = tracing_appender::non_blocking(root_appender);
        guards.push(root_guard);

        let root_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.file_level.to_string()));
        let root_layer = fmt::layer()
            .with_writer(root_nb)
            .with_target(true)
            .with_thread_names(true)
            .with_ansi(false)
            .with_filter(root_filter);
        layers.push(Box::new(root_layer));

        for component in COMPONENT_LOGS {
            let appender = RollingFileAppender::new(
                config.rotation.into(),
                &config.log_dir,
                component.file_name,
            );
            let (nb, guard) = tracing_appender::non_blocking(appender);
            guards.push(guard);

            let level: LevelFilter = config.file_level.into();
            let mut targets = Targets::new();
            for target in component.targets {
                targets = targets.with_target(*target, level);
            }

            let layer = fmt::layer()
                .with_writer(nb)
                .with_target(true)
                .with_ansi(false)
                .with_filter(targets);
            layers.push(Box::new(layer));
        }
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))?;

    if config.file_logging {
        tracing::info!(
            log_dir = %config.log_dir.display(),
            "File logging initialized: {} (root) + {} component log files",
            ROOT_LOG_FILE,
            COMPONENT_LOGS.len()
        );
    }

    Ok(LoggingGuard {
        _file_guards: guards,
    })
}
