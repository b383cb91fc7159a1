//! Logging facade.
//!
//! The macros in this module forward to the [`log`](https://docs.rs/log)
//! crate or to [`tracing`](https://docs.rs/tracing), depending on which
//! Cargo feature is enabled. Enable at most one of the two.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! With neither feature enabled the macros expand to nothing, so the matcher
//! stays free of side effects in builds that do not want diagnostics.
//!
//! ```ignore
//! use dashboard_navigator::{debug_log, trace_log};
//!
//! trace_log!("Matching '{}' against {} items", path, navigation.len());
//! debug_log!("Active page for '{}' is '{}'", pathname, page.title);
//! ```

/// Emit a **trace**-level message. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level message. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level message.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}
