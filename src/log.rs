//! Pluggable leveled logging for client internals.
//!
//! The transport and decoder report failures through a [`LeveledLogger`]
//! capability that is injected at client construction. The default
//! [`StderrLogger`] prints warnings and errors to stderr and stays silent
//! below that threshold.

use std::fmt::{self, Display, Formatter};

/// Capability trait for leveled logging.
///
/// Implement this on any logger or logger wrapper to receive diagnostic
/// messages from the client. Implementations must be safe to call from
/// concurrent operations.
///
/// # Example
///
/// ```rust
/// use phone_auth::LeveledLogger;
///
/// struct PrintLogger;
///
/// impl LeveledLogger for PrintLogger {
///     fn debug(&self, message: &str) {
///         println!("DEBUG: {message}");
///     }
///     fn info(&self, message: &str) {
///         println!("INFO: {message}");
///     }
///     fn warn(&self, message: &str) {
///         eprintln!("WARN: {message}");
///     }
///     fn error(&self, message: &str) {
///         eprintln!("ERROR: {message}");
///     }
/// }
/// ```
pub trait LeveledLogger: Send + Sync {
    /// Log a debug message.
    fn debug(&self, message: &str);
    /// Log an informational message.
    fn info(&self, message: &str);
    /// Log a warning message.
    fn warn(&self, message: &str);
    /// Log an error message.
    fn error(&self, message: &str);
}

/// Minimum severity a [`StderrLogger`] will emit.
///
/// [`Level::Null`] disables output entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Null,
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Null => "NULL",
        };
        write!(f, "{name}")
    }
}

/// Default logger implementation.
///
/// Prints warnings and errors to stderr and informational/debug messages to
/// stdout, filtered by the configured [`Level`]. The default threshold is
/// [`Level::Warn`].
#[derive(Debug, Clone)]
pub struct StderrLogger {
    /// Minimum level that will be emitted.
    pub level: Level,
}

impl StderrLogger {
    /// Create a logger with the given threshold.
    pub fn with_level(level: Level) -> Self {
        Self { level }
    }

    fn enabled(&self, level: Level) -> bool {
        self.level != Level::Null && level >= self.level
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self { level: Level::Warn }
    }
}

impl LeveledLogger for StderrLogger {
    fn debug(&self, message: &str) {
        if self.enabled(Level::Debug) {
            println!("[DEBUG] {message}");
        }
    }

    fn info(&self, message: &str) {
        if self.enabled(Level::Info) {
            println!("[INFO] {message}");
        }
    }

    fn warn(&self, message: &str) {
        if self.enabled(Level::Warn) {
            eprintln!("[WARN] {message}");
        }
    }

    fn error(&self, message: &str) {
        if self.enabled(Level::Error) {
            eprintln!("[ERROR] {message}");
        }
    }
}

/// Logger that discards everything. Useful in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl LeveledLogger for NullLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Null);
    }

    #[test]
    fn test_default_threshold_is_warn() {
        let logger = StderrLogger::default();
        assert_eq!(logger.level, Level::Warn);
        assert!(!logger.enabled(Level::Info));
        assert!(logger.enabled(Level::Warn));
        assert!(logger.enabled(Level::Error));
    }

    #[test]
    fn test_null_level_disables_everything() {
        let logger = StderrLogger::with_level(Level::Null);
        assert!(!logger.enabled(Level::Error));
    }
}
