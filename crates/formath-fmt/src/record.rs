use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// `strftime` pattern of the timestamp prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Severity tag printed in brackets on every log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// Any other tag, printed exactly as given.
    Custom(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    /// Only the exact upper-case names map to the named levels. Anything
    /// else becomes [`Level::Custom`] so the tag prints as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s {
            "TRACE" => Level::Trace,
            "DEBUG" => Level::Debug,
            "INFO" => Level::Info,
            "WARN" => Level::Warn,
            "ERROR" => Level::Error,
            _ => Level::Custom(s.to_string()),
        };
        Ok(level)
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        Level::from(s.as_str())
    }
}

impl From<&Level> for Level {
    fn from(level: &Level) -> Self {
        level.clone()
    }
}

/// A single log line before it is written.
///
/// `Display` produces the exact output shape:
///
/// ```text
/// [2024-01-31 09:15:00] [INFO] message
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub level: Level,
    pub message: String,
}

impl LogRecord {
    /// Creates a record stamped with the current local wall-clock time,
    /// truncated to whole seconds.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        let now = Local::now().naive_local();
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        Self::at(timestamp, level, message)
    }

    pub fn at(timestamp: NaiveDateTime, level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}
