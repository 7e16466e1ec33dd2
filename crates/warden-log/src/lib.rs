#![deny(missing_docs)]

//! Defines the output format of traces, events, and spans produced
//! by `tracing` in the warden CLI and the libraries it uses.

mod formatter;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// How much detail each log line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// message only, no timestamps or targets
    Compact,
    /// timestamps and targets
    Full,
    /// timestamps, targets, and thread ids
    Threaded,
}

impl From<Level> for Verbosity {
    fn from(level: Level) -> Self {
        if level >= Level::TRACE {
            Verbosity::Threaded
        } else if level >= Level::DEBUG {
            Verbosity::Full
        } else {
            Verbosity::Compact
        }
    }
}

/// Initializes a global tracing subscriber that writes to stderr.
///
/// Nothing is printed when `level` is `None`. Calling this more than once
/// keeps the first subscriber.
pub fn init(level: Option<Level>) {
    if let Some(level) = level {
        match Verbosity::from(level) {
            Verbosity::Compact => formatter::least_verbose(level),
            Verbosity::Full => formatter::verbose(level),
            Verbosity::Threaded => formatter::very_verbose(level),
        }
    }
}
