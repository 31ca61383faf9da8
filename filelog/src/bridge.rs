use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::file_log;

/// Forwards `log` records to the process-wide logger.
struct FileLogBridge;

static BRIDGE: FileLogBridge = FileLogBridge;

impl Log for FileLogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        file_log().is_enabled() && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            file_log().log(record.level().into(), *record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the process-wide logger as the `log` crate backend.
///
/// `Error` maps to error, `Warn` to warning, everything else to debug.
/// Fails if another `log` backend is already installed.
pub fn install(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(level);
    Ok(())
}
