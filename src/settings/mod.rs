//! The `settings` module reads logger configuration from the environment.
//! See `bin/settings_demo.rs` for a test binary demonstrating its usage.

mod settings;
pub use settings::*;
