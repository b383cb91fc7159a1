//! Routing adapter seam.
//!
//! Host applications plug their own router in through the [`Router`] trait:
//! the active-page resolver only reads [`Router::pathname`], while menus and
//! breadcrumb links use [`Router::search_params`] and [`Router::navigate`].
//!
//! [`MemoryRouter`] is an in-memory implementation with a history stack, for
//! tests, demos and hosts without a URL bar.
//!
//! ```
//! use dashboard_navigator::{HistoryMode, MemoryRouter, NavigateOptions, Router};
//!
//! let mut router = MemoryRouter::new("/");
//! router.navigate("/orders?page=2", NavigateOptions::default());
//! assert_eq!(router.pathname(), "/orders");
//! assert_eq!(router.search_params().get("page"), Some("2"));
//!
//! router.navigate("/orders/7", NavigateOptions::new().history(HistoryMode::Replace));
//! assert!(router.back());
//! assert_eq!(router.pathname(), "/");
//! ```

use crate::error::NavigationError;
use crate::params::QueryParams;
use crate::{debug_log, trace_log};
use std::fmt;
use std::str::FromStr;

/// How a navigation affects the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Let the router decide; [`MemoryRouter`] pushes
    #[default]
    Auto,
    /// Always add a history entry
    Push,
    /// Always overwrite the current entry
    Replace,
}

impl HistoryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryMode::Auto => "auto",
            HistoryMode::Push => "push",
            HistoryMode::Replace => "replace",
        }
    }
}

impl FromStr for HistoryMode {
    type Err = NavigationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "auto" => Ok(HistoryMode::Auto),
            "push" => Ok(HistoryMode::Push),
            "replace" => Ok(HistoryMode::Replace),
            other => Err(NavigationError::InvalidHistoryMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`Router::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
    pub history: HistoryMode,
}

impl NavigateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the history mode.
    pub fn history(mut self, history: HistoryMode) -> Self {
        self.history = history;
        self
    }
}

/// Minimal router interface consumed by the dashboard shell.
pub trait Router {
    /// Current absolute path, without query or fragment.
    fn pathname(&self) -> &str;

    /// Current search parameters.
    fn search_params(&self) -> &QueryParams;

    /// Navigate to `url` (path, optionally followed by `?query`).
    fn navigate(&mut self, url: &str, options: NavigateOptions);
}

/// The router's pathname, reading an empty one as `/`.
///
/// Only routers go through this; [`use_active_page`](crate::use_active_page)
/// takes the pathname as given.
pub(crate) fn current_pathname<R: Router + ?Sized>(router: &R) -> &str {
    match router.pathname() {
        "" => "/",
        pathname => pathname,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Location {
    pathname: String,
    search: QueryParams,
}

impl Location {
    /// Parse `url` relative to `current`. The fragment is dropped; an empty
    /// path keeps the current pathname; a relative path is made absolute.
    fn parse(url: &str, current: Option<&Location>) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        let (path, query) = url.split_once('?').unwrap_or((url, ""));

        let pathname = if path.is_empty() {
            current.map_or_else(|| "/".to_string(), |loc| loc.pathname.clone())
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            pathname,
            search: QueryParams::from_query_string(query),
        }
    }
}

/// In-memory [`Router`] with back/forward history.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    history: Vec<Location>,
    current: usize,
}

impl MemoryRouter {
    /// Create a router positioned at `initial_url`.
    pub fn new(initial_url: &str) -> Self {
        Self {
            history: vec![Location::parse(initial_url, None)],
            current: 0,
        }
    }

    fn location(&self) -> &Location {
        &self.history[self.current]
    }

    fn push(&mut self, location: Location) {
        // Remove forward history when pushing
        self.history.truncate(self.current + 1);
        self.history.push(location);
        self.current += 1;
    }

    fn replace(&mut self, location: Location) {
        self.history[self.current] = location;
    }

    /// Go back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.current -= 1;
            trace_log!("MemoryRouter back → '{}'", self.location().pathname);
            true
        } else {
            false
        }
    }

    /// Go forward one entry. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.can_go_forward() {
            self.current += 1;
            trace_log!("MemoryRouter forward → '{}'", self.location().pathname);
            true
        } else {
            false
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.history.len()
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router for MemoryRouter {
    fn pathname(&self) -> &str {
        &self.location().pathname
    }

    fn search_params(&self) -> &QueryParams {
        &self.location().search
    }

    fn navigate(&mut self, url: &str, options: NavigateOptions) {
        let next = Location::parse(url, Some(self.location()));
        debug_log!("MemoryRouter {} '{}'", options.history, next.pathname);

        match options.history {
            HistoryMode::Replace => self.replace(next),
            HistoryMode::Auto | HistoryMode::Push => self.push(next),
        }
    }
}
