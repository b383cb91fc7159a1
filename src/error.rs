//! Error types.
//!
//! Path matching and active-page resolution are total: an unknown route is
//! reported as `None`, never as an error. [`NavigationError`] only covers the
//! places where a caller hands the crate something that cannot be used:
//!
//! - a `pattern` that does not compile ([`RoutePattern::parse`](crate::RoutePattern::parse));
//! - an unknown history mode string ([`HistoryMode`](crate::HistoryMode));
//! - a navigation item that cannot be deserialized (`serde` feature);
//! - an unusable resolver configuration.
//!
//! # Examples
//!
//! ```
//! use dashboard_navigator::{HistoryMode, NavigationError};
//!
//! let err = "sideways".parse::<HistoryMode>().unwrap_err();
//! assert_eq!(
//!     err,
//!     NavigationError::InvalidHistoryMode { value: "sideways".into() }
//! );
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid history mode: 'sideways' (expected auto, push or replace)"
//! );
//! ```

use std::fmt;

/// Errors raised at the edges of the navigation engine.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A route template could not be compiled
    InvalidPattern { pattern: String, reason: String },

    /// A history mode string outside `auto` / `push` / `replace`
    InvalidHistoryMode { value: String },

    /// A navigation item with missing or contradictory fields
    InvalidItem { message: String },

    /// Resolver configuration that cannot be honored
    InvalidConfig { message: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid route pattern '{}': {}", pattern, reason)
            }
            NavigationError::InvalidHistoryMode { value } => {
                write!(
                    f,
                    "Invalid history mode: '{}' (expected auto, push or replace)",
                    value
                )
            }
            NavigationError::InvalidItem { message } => {
                write!(f, "Invalid navigation item: {}", message)
            }
            NavigationError::InvalidConfig { message } => {
                write!(f, "Invalid resolver configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for NavigationError {}
