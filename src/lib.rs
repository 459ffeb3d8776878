pub mod logger;
pub mod settings;

#[doc(hidden)]
pub use tracing as __tracing;
