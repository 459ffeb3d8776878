/// Logs at DPANIC. Accepts everything `tracing::error!` does except `target:`.
#[macro_export]
macro_rules! dpanic {
    ($($arg:tt)+) => {
        $crate::__tracing::error!(target: $crate::logger::DPANIC_TARGET, $($arg)+)
    };
}

/// Logs the formatted message at PANIC, then panics with it.
#[macro_export]
macro_rules! panic_log {
    ($($arg:tt)+) => {{
        let message = ::std::format!($($arg)+);
        $crate::__tracing::error!(target: $crate::logger::PANIC_TARGET, "{}", message);
        ::std::panic!("{}", message)
    }};
}

/// Logs the formatted message at FATAL, then exits with status 1.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {{
        let message = ::std::format!($($arg)+);
        $crate::__tracing::error!(target: $crate::logger::FATAL_TARGET, "{}", message);
        ::std::process::exit(1)
    }};
}
