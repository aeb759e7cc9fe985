//! Optional logging macros
//!
//! Forward to the `log` facade when the `log` feature is on and compile to
//! nothing otherwise, so the core stays usable on targets without a logger.

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => { { let _ = core::format_args!($($arg)*); } };
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => { { let _ = core::format_args!($($arg)*); } };
}

#[cfg(feature = "log")]
#[allow(unused_macros)]
macro_rules! log_error {
    ($($arg:tt)*) => { log::error!($($arg)*) };
}

#[cfg(not(feature = "log"))]
#[allow(unused_macros)]
macro_rules! log_error {
    ($($arg:tt)*) => { { let _ = core::format_args!($($arg)*); } };
}
