use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use thiserror::Error;
use tracing::{Level, Metadata};

pub const LEVEL_DEBUG: &str = "DEBUG";
pub const LEVEL_INFO: &str = "INFO";
pub const LEVEL_WARN: &str = "WARN";
pub const LEVEL_ERROR: &str = "ERROR";
pub const LEVEL_DPANIC: &str = "DPANIC";

/// Targets reserved for the severities `tracing` has no level for.
/// Events carrying them are emitted at `Level::ERROR`.
pub const DPANIC_TARGET: &str = "tintlog::dpanic";
pub const PANIC_TARGET: &str = "tintlog::panic";
pub const FATAL_TARGET: &str = "tintlog::fatal";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("invalid log level specified for logger: {0:?}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info,
    Warn,
    Error,
    DPanic,
    Panic,
    Fatal,
}

impl Severity {
    /// Severities a threshold may be configured to by name.
    pub const CONFIGURABLE: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::DPanic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => LEVEL_DEBUG,
            Severity::Info => LEVEL_INFO,
            Severity::Warn => LEVEL_WARN,
            Severity::Error => LEVEL_ERROR,
            Severity::DPanic => LEVEL_DPANIC,
            Severity::Panic => "PANIC",
            Severity::Fatal => "FATAL",
        }
    }

    /// Recovers the severity of a `tracing` event. `TRACE` has none.
    pub fn of(meta: &Metadata<'_>) -> Option<Severity> {
        match *meta.level() {
            Level::TRACE => None,
            Level::DEBUG => Some(Severity::Debug),
            Level::INFO => Some(Severity::Info),
            Level::WARN => Some(Severity::Warn),
            Level::ERROR => Some(match meta.target() {
                DPANIC_TARGET => Severity::DPanic,
                PANIC_TARGET => Severity::Panic,
                FATAL_TARGET => Severity::Fatal,
                _ => Severity::Error,
            }),
        }
    }

    fn from_u8(value: u8) -> Severity {
        match value {
            0 => Severity::Debug,
            1 => Severity::Info,
            2 => Severity::Warn,
            3 => Severity::Error,
            4 => Severity::DPanic,
            5 => Severity::Panic,
            _ => Severity::Fatal,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LevelError;

    /// Accepts the configurable names in any case. An empty string means DEBUG.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Severity::Debug);
        }
        let upper = s.to_ascii_uppercase();
        Severity::CONFIGURABLE
            .into_iter()
            .find(|severity| severity.as_str() == upper)
            .ok_or_else(|| LevelError::Invalid(s.to_string()))
    }
}

/// Minimum severity shared between a logger's filter and whoever adjusts it.
/// Clones observe the same value.
#[derive(Debug, Clone)]
pub struct AtomicLevel(Arc<AtomicU8>);

impl AtomicLevel {
    pub fn new(level: Severity) -> Self {
        Self(Arc::new(AtomicU8::new(level as u8)))
    }

    pub fn level(&self) -> Severity {
        Severity::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn set_level(&self, level: Severity) {
        self.0.store(level as u8, Ordering::Release);
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level()
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(Severity::Debug)
    }
}
