use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
};

use crate::{config::FILELOG_CONFIG, utils::LogRecord};

/// A destination for rendered log lines.
///
/// Writers take `&self` so one instance can be shared by every logging thread without a lock.
/// Each call must emit the record as a single line and flush it before returning.
pub trait LogWriter: Send + Sync {
    fn write(&self, record: &LogRecord) -> io::Result<()>;
}

/// Truncating log file. Every line goes out in a single write followed by a flush.
#[derive(Debug)]
pub struct LogFile {
    file: File,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let file = File::options()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)?;
        Ok(Self { file })
    }
}

impl LogWriter for LogFile {
    fn write(&self, record: &LogRecord) -> io::Result<()> {
        // `&File` writes straight to the descriptor, so lines from concurrent callers never split.
        let mut file = &self.file;
        file.write_all(record.line().as_bytes())?;
        file.flush()
    }
}

/// Console sink used when no platform log is available.
#[derive(Debug)]
pub struct LogStdout {
    color: bool,
}

impl LogStdout {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Default for LogStdout {
    fn default() -> Self {
        Self::new(FILELOG_CONFIG.COLOR)
    }
}

impl LogWriter for LogStdout {
    fn write(&self, record: &LogRecord) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if self.color && out.is_terminal() {
            writeln!(
                out,
                "{} {}: {}",
                record.timestamp,
                record.severity.colored_label(),
                record.message
            )?;
        } else {
            write_plain(&mut out, record)?;
        }
        out.flush()
    }
}

/// Writes the uncolored line, byte for byte what the file sink gets.
fn write_plain<W: Write>(out: &mut W, record: &LogRecord) -> io::Result<()> {
    out.write_all(record.line().as_bytes())
}

/// Android logcat sink. The message goes out without timestamp, logcat adds its own.
#[cfg(target_os = "android")]
pub struct LogPlatform {
    logger: android_logger::AndroidLogger,
}

#[cfg(target_os = "android")]
impl LogPlatform {
    pub fn new(tag: &str) -> Self {
        let config = android_logger::Config::default()
            .with_tag(tag.to_owned())
            .with_max_level(log::LevelFilter::Trace);
        Self {
            logger: android_logger::AndroidLogger::new(config),
        }
    }
}

#[cfg(target_os = "android")]
impl Default for LogPlatform {
    fn default() -> Self {
        Self::new(&FILELOG_CONFIG.TAG)
    }
}

#[cfg(target_os = "android")]
impl LogWriter for LogPlatform {
    fn write(&self, record: &LogRecord) -> io::Result<()> {
        use log::Log;
        self.logger.log(
            &log::Record::builder()
                .level(record.severity.level())
                .target(&FILELOG_CONFIG.TAG)
                .args(format_args!("{}", record.message))
                .build(),
        );
        Ok(())
    }
}

/// The console sink for the current platform: logcat on Android, stdout elsewhere.
pub fn platform_console() -> Box<dyn LogWriter> {
    #[cfg(target_os = "android")]
    {
        Box::new(LogPlatform::default())
    }
    #[cfg(not(target_os = "android"))]
    {
        Box::new(LogStdout::default())
    }
}
