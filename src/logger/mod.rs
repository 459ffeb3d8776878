//! Console logger with a runtime adjustable threshold and colored level tags.
//!
//! The process-wide facade (`build_logger`, `set_level`, `current_level`,
//! `logger`) delegates to a single [`Logger`]. Independent instances come from
//! [`Logger::builder`]. See `bin/logger_demo.rs` for the output it produces.

mod color;
mod format;
mod global;
mod level;
mod logger;
mod macros;

pub use color::*;
pub use format::*;
pub use global::*;
pub use level::*;
pub use logger::*;

pub use crate::{dpanic, fatal, panic_log};
pub use tracing::{debug, error, info, trace, warn};
