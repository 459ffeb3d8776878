use super::{LevelError, Logger, Severity};
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

fn install(level: Severity) -> Logger {
    let logger = Logger::new(level);
    if tracing::dispatcher::set_global_default(logger.dispatch().clone()).is_err() {
        logger.in_scope(|| {
            tracing::warn!("global subscriber already set, route events through Logger::in_scope")
        });
    }
    logger
}

/// Builds the process-wide logger once. Later calls validate `level` but
/// leave the existing logger untouched.
pub fn try_build_logger(level: &str) -> Result<&'static Logger, LevelError> {
    let level: Severity = level.parse()?;
    Ok(LOGGER.get_or_init(|| install(level)))
}

/// Like [`try_build_logger`], but an invalid level name is fatal.
pub fn build_logger(level: &str) {
    if let Err(err) = try_build_logger(level) {
        panic!("{err}");
    }
}

/// Sets the threshold of the process-wide logger, building it at that
/// level if it does not exist yet.
pub fn try_set_level(level: &str) -> Result<(), LevelError> {
    let level: Severity = level.parse()?;
    LOGGER.get_or_init(|| install(level)).set_level(level);
    Ok(())
}

pub fn set_level(level: &str) {
    if let Err(err) = try_set_level(level) {
        panic!("{err}");
    }
}

/// Name of the effective threshold. Reports DEBUG before anything is built.
pub fn current_level() -> &'static str {
    LOGGER.get().map_or(Severity::Debug, Logger::level).as_str()
}

/// The process-wide logger, built at DEBUG on first use.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| install(Severity::Debug))
}
