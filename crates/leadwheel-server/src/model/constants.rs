//! Configuration keys and default values

pub const DEFAULT_CONFIG_FILE: &str = "conf/application.yml";
pub const ENV_PREFIX: &str = "LEADWHEEL";

// Server
pub const SERVER_ADDRESS_PROPERTY: &str = "server.address";
pub const SERVER_PORT_PROPERTY: &str = "server.port";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// Storage
pub const STORAGE_MODE_PROPERTY: &str = "storage.mode";
pub const STORAGE_PATH_PROPERTY: &str = "storage.path";
pub const DEFAULT_STORAGE_PATH: &str = "data/leads.csv";

// Static frontend
pub const STATIC_DIR_PROPERTY: &str = "static.dir";
pub const DEFAULT_STATIC_DIR: &str = "frontend";
pub const INDEX_FILE: &str = "index.html";

// Prize wheel
pub const PRIZE_SEED_PROPERTY: &str = "prize.seed";

// Logging
pub const LOGS_PATH_PROPERTY: &str = "logs.path";
pub const LOGS_LEVEL_PROPERTY: &str = "logs.level";
pub const LOGS_CONSOLE_PROPERTY: &str = "logs.console";
pub const LOGS_FILE_PROPERTY: &str = "logs.file";
pub const LOGS_FORMAT_PROPERTY: &str = "logs.format";
pub const LOGS_ROTATION_PROPERTY: &str = "logs.rotation";
pub const DEFAULT_LOGS_PATH: &str = "logs";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Metrics
pub const METRICS_ENABLED_PROPERTY: &str = "metrics.enabled";
pub const METRICS_PORT_PROPERTY: &str = "metrics.port";
pub const DEFAULT_METRICS_PORT: u16 = 9000;

// HTTP API
pub const API_PREFIX: &str = "/api";
