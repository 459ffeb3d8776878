use super::{AtomicLevel, ConsoleFormat, LayoutTime, LevelError, Severity};
use anyhow::Result;
use serde::Deserialize;
use tracing::Dispatch;
use tracing_subscriber::{
    Layer, filter,
    fmt::{self, MakeWriter, writer::BoxMakeWriter},
    layer::SubscriberExt,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Severity::Debug.to_string(),
        }
    }
}

/// A console logger and the threshold gating it.
///
/// Clones share the gate, so a level set through any clone applies to all.
#[derive(Debug, Clone)]
pub struct Logger {
    level: AtomicLevel,
    dispatch: Dispatch,
}

pub struct LoggerBuilder {
    level: Severity,
    writer: BoxMakeWriter,
    display_caller: bool,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            level: Severity::Debug,
            writer: BoxMakeWriter::new(std::io::stdout),
            display_caller: true,
        }
    }

    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn writer<W>(mut self, writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = BoxMakeWriter::new(writer);
        self
    }

    pub fn with_caller(mut self, display_caller: bool) -> Self {
        self.display_caller = display_caller;
        self
    }

    pub fn build(self) -> Logger {
        let level = AtomicLevel::new(self.level);

        // Dynamic so callsite interest is never cached across level changes.
        let gate = level.clone();
        let filter = filter::dynamic_filter_fn(move |meta, _cx| {
            Severity::of(meta).is_some_and(|severity| gate.enabled(severity))
        });

        let format = ConsoleFormat::new(LayoutTime::default())
            .with_caller(self.display_caller);
        let layer = fmt::layer()
            .with_ansi(false)
            .event_format(format)
            .with_writer(self.writer)
            .with_filter(filter);

        let dispatch = Dispatch::new(tracing_subscriber::registry().with(layer));
        Logger { level, dispatch }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Stdout logger at `level`.
    pub fn new(level: Severity) -> Self {
        LoggerBuilder::new().level(level).build()
    }

    pub fn level(&self) -> Severity {
        self.level.level()
    }

    pub fn current_level(&self) -> &'static str {
        self.level().as_str()
    }

    pub fn set_level(&self, level: Severity) {
        self.level.set_level(level);
    }

    pub fn try_set_level(&self, name: &str) -> Result<Severity, LevelError> {
        let level = name.parse()?;
        self.set_level(level);
        Ok(level)
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        self.level.enabled(severity)
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Runs `f` with this logger as the current thread's default dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    pub fn reload_from_config(&self, config: &LogConfig) -> Result<()> {
        self.try_set_level(&config.level)?;
        Ok(())
    }
}
