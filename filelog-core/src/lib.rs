//! # filelog-core
//! Core utilities for filelog - line formatting, severities and sinks.

mod config;
mod log_writer;
mod utils;

pub use config::{DEFAULT_TAG, FILELOG_CONFIG, FileLogConfig, LOGS_ENABLED};
#[cfg(target_os = "android")]
pub use log_writer::LogPlatform;
pub use log_writer::{LogFile, LogStdout, LogWriter, platform_console};
pub use utils::{LogRecord, Severity, format_timestamp};
