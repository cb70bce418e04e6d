//! Application startup utilities module.

mod http;
mod logging;

pub use http::main_server;
pub use logging::{LogFormat, LogRotation, LoggingConfig, LoggingGuard, init_logging};
