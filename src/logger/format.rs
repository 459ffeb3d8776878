use super::{Severity, colorize};
use chrono::Local;
use std::fmt::{self, Write};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock time in a `chrono` strftime layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutTime {
    layout: &'static str,
}

impl LayoutTime {
    pub fn new(layout: &'static str) -> Self {
        Self { layout }
    }
}

impl Default for LayoutTime {
    fn default() -> Self {
        Self::new(TIME_LAYOUT)
    }
}

impl FormatTime for LayoutTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(self.layout))
    }
}

/// Tab separated console line: `LEVEL  time  file:line  message fields`.
#[derive(Debug, Clone)]
pub struct ConsoleFormat<T = LayoutTime> {
    timer: T,
    display_caller: bool,
}

impl<T: FormatTime> ConsoleFormat<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            display_caller: true,
        }
    }

    pub fn with_caller(self, display_caller: bool) -> Self {
        Self {
            display_caller,
            ..self
        }
    }
}

impl<S, N, T> FormatEvent<S, N> for ConsoleFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let severity = Severity::of(meta);
        let name = severity.map_or_else(|| meta.level().as_str(), Severity::as_str);
        writer.write_str(&colorize(severity, name))?;

        writer.write_char('\t')?;
        self.timer.format_time(&mut writer)?;

        if self.display_caller {
            if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
                write!(writer, "\t{file}:{line}")?;
            }
        }

        writer.write_char('\t')?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
