//! Logging infrastructure for the mdpath library.
//!
//! The library reports diagnostics through the `log` facade. This module
//! provides a small stderr backend for it with three verbosity levels, used
//! by the command-line tool.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "MDPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use mdpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including debug and trace messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Trace,
        }
    }
}

/// Writes `LEVEL: message` lines to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Pick the level from CLI flags, then `MDPATH_LOG_MODE`, then Normal.
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence. An
/// unrecognized environment value is ignored.
#[must_use]
pub fn resolve_level(verbose: bool, quiet: bool) -> LogLevel {
    // CLI flags take precedence
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return level;
        }
    }

    LogLevel::Normal
}

/// Installs the stderr logger and sets its level.
///
/// The level is chosen by [`resolve_level`]. Calling this again only changes
/// the level; the logger itself is installed once per process.
///
/// # Examples
///
/// ```
/// use mdpath::{init_logger, LogLevel};
///
/// let level = init_logger(true, false);
/// assert_eq!(level, LogLevel::Verbose);
/// log::debug!("visible at verbose level");
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_level(verbose, quiet);

    // Already installed by an earlier call
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level.filter());

    level
}
