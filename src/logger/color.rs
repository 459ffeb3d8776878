use super::Severity;

pub const RESET_COLOR: &str = "\x1b[0m";

pub fn level_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Debug => "\x1b[36m",  // cyan
        Severity::Info => "\x1b[32m",   // green
        Severity::Warn => "\x1b[33m",   // yellow
        Severity::Error => "\x1b[31m",  // red
        Severity::DPanic => "\x1b[35m", // magenta
        Severity::Panic | Severity::Fatal => "\x1b[1;31m", // bright red
    }
}

/// Renders the level tag: color, upper-case name, reset.
/// Events without a severity are rendered uncolored.
pub fn colorize(severity: Option<Severity>, name: &str) -> String {
    let color = severity.map_or(RESET_COLOR, level_color);
    format!("{color}{name}{RESET_COLOR}")
}
