//! # filelog
//! Process-wide, thread-safe diagnostic logger writing to the console (logcat on Android)
//! and to an optional log file.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! filelog = "0.1.0"
//! ```
//!
//! ```rust
//! filelog::file_log().init("/tmp/filelog_doc_usage.log");
//! filelog::debug!("start");
//! filelog::error!("fail:{}", "disk");
//!
//! let content = std::fs::read_to_string("/tmp/filelog_doc_usage.log").unwrap();
//! if filelog::LOGS_ENABLED {
//!     let lines: Vec<_> = content.lines().collect();
//!     assert_eq!(lines.len(), 2);
//!     assert!(lines[0].ends_with("debug: start"));
//!     assert!(lines[1].ends_with("error: fail:disk"));
//! } else {
//!     assert!(content.is_empty());
//! }
//! ```
//!
//! Logging is compiled in for debug builds only. Enable the `release-logs` feature
//! to keep it in release builds. When disabled, the macros reduce to nothing.
//!
//! ## Log file
//! The file is attached at most once per logger. Later `init` calls, and calls with an
//! empty path, are ignored. The file is truncated on open and every line is flushed
//! as soon as it is written.
//!
//! ## Dedicated loggers
//! ```rust
//! use filelog::logger_config;
//!
//! let logger = logger_config()
//!     .enabled(true)
//!     .no_console()
//!     .with_log_file("/tmp/filelog_doc_local.log")
//!     .build();
//! logger.warn(format_args!("disk at {}%", 93));
//! assert!(std::fs::read_to_string("/tmp/filelog_doc_local.log")
//!     .unwrap()
//!     .ends_with("warning: disk at 93%\n"));
//! ```
//!
//! ## `log` crate integration
//! [`install`] routes `log::error!`, `log::warn!` and friends to the global logger.

mod bridge;

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex, OnceLock, PoisonError},
};

use chrono::{Local, NaiveDateTime};
use filelog_core::platform_console;

pub use bridge::install;
pub use filelog_core::{
    FILELOG_CONFIG, LOGS_ENABLED, LogFile, LogRecord, LogStdout, LogWriter, Severity,
    format_timestamp,
};
#[cfg(target_os = "android")]
pub use filelog_core::LogPlatform;

type Clock = Box<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// A logger dispatching each line to a console sink and an optional file sink.
pub struct Logger {
    enabled: bool,
    clock: Clock,
    console: Option<Box<dyn LogWriter>>,
    /// Written once under `init_lock`, then read without locking.
    file: OnceLock<LogFile>,
    init_lock: Mutex<()>,
}

impl Logger {
    /// Attaches the log file at `path`, truncating it.
    ///
    /// Does nothing if `path` is empty or a file is already attached. An open failure
    /// leaves the logger without a file sink, a later call may try again.
    pub fn init<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if path.as_os_str().is_empty() || self.file.get().is_some() {
            return;
        }
        if let Ok(file) = LogFile::new(path) {
            self.file.set(file).ok();
        }
    }

    /// Whether a log file has been attached.
    pub fn has_log_file(&self) -> bool {
        self.file.get().is_some()
    }

    /// Whether this logger emits anything at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Writes one line at `severity` to every active sink. Sink failures are dropped.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.enabled {
            return;
        }
        let record = LogRecord::new((self.clock)(), severity, args);
        if let Some(console) = &self.console {
            console.write(&record).ok();
        }
        if let Some(file) = self.file.get() {
            file.write(&record).ok();
        }
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args)
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args)
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args)
    }
}

/// The process-wide logger, created on first access and never dropped.
static FILE_LOG: LazyLock<Logger> = LazyLock::new(|| logger_config().build());

/// Returns the process-wide logger.
pub fn file_log() -> &'static Logger {
    &FILE_LOG
}

/// Logs an error line through the process-wide logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        if $crate::LOGS_ENABLED {
            $crate::file_log().error(::std::format_args!($($arg)+))
        }
    };
}

/// Logs a warning line through the process-wide logger.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        if $crate::LOGS_ENABLED {
            $crate::file_log().warn(::std::format_args!($($arg)+))
        }
    };
}

/// Logs a debug line through the process-wide logger.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        if $crate::LOGS_ENABLED {
            $crate::file_log().debug(::std::format_args!($($arg)+))
        }
    };
}

/// Builder for configuring a [`Logger`].
pub struct ConfigBuilder {
    enabled: bool,
    clock: Option<Clock>,
    console: Option<Box<dyn LogWriter>>,
    no_console: bool,
    log_file: Option<PathBuf>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            enabled: LOGS_ENABLED,
            clock: None,
            console: None,
            no_console: false,
            log_file: None,
        }
    }
}

impl ConfigBuilder {
    /// Overrides the build-time switch for this logger.
    pub fn enabled(self, yes: bool) -> Self {
        Self {
            enabled: yes,
            ..self
        }
    }
    /// Sets the time source for timestamps. Defaults to local time.
    pub fn with_clock<F>(self, clock: F) -> Self
    where
        F: Fn() -> NaiveDateTime + Send + Sync + 'static,
    {
        Self {
            clock: Some(Box::new(clock)),
            ..self
        }
    }
    /// Replaces the platform console sink.
    pub fn with_console<W: LogWriter + 'static>(self, writer: W) -> Self {
        Self {
            console: Some(Box::new(writer)),
            no_console: false,
            ..self
        }
    }
    /// Ignore console logging
    pub fn no_console(self) -> Self {
        Self {
            no_console: true,
            ..self
        }
    }
    /// Attaches a log file on build, same as calling [`Logger::init`] afterwards.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Self {
        Self {
            log_file: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }
    pub fn build(self) -> Logger {
        let Self {
            enabled,
            clock,
            console,
            no_console,
            log_file,
        } = self;
        let console = if no_console {
            None
        } else {
            Some(console.unwrap_or_else(platform_console))
        };
        let logger = Logger {
            enabled,
            clock: clock.unwrap_or_else(|| Box::new(|| Local::now().naive_local())),
            console,
            file: OnceLock::new(),
            init_lock: Mutex::new(()),
        };
        if let Some(path) = log_file {
            logger.init(path);
        }
        logger
    }
}

/// Returns a default ConfigBuilder for configuring a logger.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
