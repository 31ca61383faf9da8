use std::fmt;

use chrono::NaiveDateTime;
use colored::{ColoredString, Colorize};
use log::Level;

/// Severity of a log line. Only selects the label and the platform priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Debug,
}

impl Severity {
    /// Word written between the timestamp and the message.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Debug => "debug",
        }
    }

    pub fn colored_label(self) -> ColoredString {
        match self {
            Severity::Error => self.label().red(),
            Severity::Warning => self.label().yellow(),
            Severity::Debug => self.label().blue(),
        }
    }

    /// Matching `log` level, used to pick the platform log priority.
    pub fn level(self) -> Level {
        match self {
            Severity::Error => Level::Error,
            Severity::Warning => Level::Warn,
            Severity::Debug => Level::Debug,
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warning,
            Level::Info | Level::Debug | Level::Trace => Severity::Debug,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats a local time as `M-D HH:MM:SS`, month and day unpadded.
pub fn format_timestamp(time: NaiveDateTime) -> String {
    time.format("%-m-%-d %H:%M:%S").to_string()
}

/// A single rendered log entry handed to every sink.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: String,
    pub severity: Severity,
    pub message: String,
}

impl LogRecord {
    pub fn new(time: NaiveDateTime, severity: Severity, args: fmt::Arguments<'_>) -> Self {
        Self {
            timestamp: format_timestamp(time),
            severity,
            message: args.to_string(),
        }
    }

    /// The full output line, newline included.
    pub fn line(&self) -> String {
        format!("{} {}: {}\n", self.timestamp, self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(month: u32, day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_timestamp_pads_time_only() {
        assert_eq!(format_timestamp(at(3, 7, 9, 5, 2)), "3-7 09:05:02");
        assert_eq!(format_timestamp(at(12, 31, 23, 59, 59)), "12-31 23:59:59");
    }

    #[test]
    fn test_line_layout() {
        let record = LogRecord::new(at(1, 2, 3, 4, 5), Severity::Error, format_args!("code={}", 42));
        assert_eq!(record.line(), "1-2 03:04:05 error: code=42\n");
        let record = LogRecord::new(at(1, 2, 3, 4, 5), Severity::Warning, format_args!("low"));
        assert_eq!(record.line(), "1-2 03:04:05 warning: low\n");
        let record = LogRecord::new(at(1, 2, 3, 4, 5), Severity::Debug, format_args!("x"));
        assert_eq!(record.line(), "1-2 03:04:05 debug: x\n");
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(Severity::from(Level::Error), Severity::Error);
        assert_eq!(Severity::from(Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(Level::Info), Severity::Debug);
        assert_eq!(Severity::from(Level::Trace), Severity::Debug);
        assert_eq!(Severity::Warning.level(), Level::Warn);
    }
}
