use std::sync::LazyLock;

use derive_from_env::FromEnv;

/// Build-time switch gating every logging call.
///
/// On in debug builds, off in release builds unless the `release-logs` feature is set.
/// When off, logging calls return before reading the clock or formatting anything.
pub const LOGS_ENABLED: bool = cfg!(any(debug_assertions, feature = "release-logs"));

/// Platform log tag used when `FILELOG_TAG` is not set.
pub const DEFAULT_TAG: &str = "sqlite3";

#[derive(FromEnv)]
#[from_env(prefix = "FILELOG")]
#[allow(non_snake_case)]
pub struct FileLogConfig {
    /// Tag attached to platform log entries.
    #[from_env(default = "sqlite3")]
    pub TAG: String,
    /// Colorize the severity word on an interactive console.
    /// Set to `false` to get the exact file line bytes on a terminal too.
    #[from_env(default = "true")]
    pub COLOR: bool,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            TAG: DEFAULT_TAG.into(),
            COLOR: true,
        }
    }
}

/// Runtime settings read once from `FILELOG_*` environment variables.
/// A malformed variable falls back to the defaults instead of failing.
pub static FILELOG_CONFIG: LazyLock<FileLogConfig> =
    LazyLock::new(|| FileLogConfig::from_env().unwrap_or_default());

#[test]
fn test_default_config() {
    let config = FileLogConfig::default();
    assert_eq!(config.TAG, "sqlite3");
    assert!(config.COLOR);
}

#[test]
fn test_env_defaults_match_constants() {
    if std::env::var_os("FILELOG_TAG").is_some() || std::env::var_os("FILELOG_COLOR").is_some() {
        return;
    }
    let config = FileLogConfig::from_env().unwrap();
    assert_eq!(config.TAG, DEFAULT_TAG);
    assert_eq!(config.COLOR, FileLogConfig::default().COLOR);
}
