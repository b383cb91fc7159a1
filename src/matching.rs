//! Path matching over a navigation tree.
//!
//! [`match_path`] finds the page whose route matches a concrete path;
//! [`item_title`] and [`item_path`] turn a page back into the title and
//! structural path shown in headers and breadcrumbs.
//!
//! # Algorithm
//!
//! Depth-first, pre-order walk over pages only (headers and dividers are
//! skipped), threading the parent's composed path down as an immutable
//! prefix:
//!
//! 1. Compose the page's path: `prefix + "/" + segment`, or `prefix` when the
//!    page has no segment.
//! 2. Without a `pattern`, the page matches when its composed path equals the
//!    requested path exactly.
//! 3. With a `pattern`, the page matches when the path satisfies the template
//!    `prefix + "/" + pattern` (see [`RoutePattern`](crate::RoutePattern)):
//!    the path starts with the prefix and the rest matches the page's
//!    compiled pattern. A pattern that does not compile never matches.
//! 4. Otherwise descend into the children, then move on to the next sibling.
//!
//! The first match wins, so ambiguous trees resolve by position.
//!
//! ```
//! use dashboard_navigator::{match_path, item_path, Navigation, NavigationPageItem};
//!
//! let navigation = Navigation::from(vec![
//!     NavigationPageItem::new().segment("").title("Home").into(),
//!     NavigationPageItem::new()
//!         .segment("orders")
//!         .title("Orders")
//!         .pattern("orders/:id")
//!         .into(),
//! ]);
//!
//! let orders = match_path(&navigation, "/orders/123").unwrap();
//! assert_eq!(orders.get_title(), Some("Orders"));
//! assert_eq!(item_path(&navigation, orders).as_deref(), Some("/orders"));
//! assert!(match_path(&navigation, "/invoices").is_none());
//! ```

use crate::navigation::{compose_path, display_path, Navigation, NavigationItem, NavigationPageItem};
use crate::params::RouteParams;
use crate::trace_log;
use std::ptr;

/// A page matched for a concrete path.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMatch<'a> {
    /// The matched page
    pub item: &'a NavigationPageItem,
    /// Structural path of the page, as returned by [`item_path`]
    pub path: String,
    /// Values bound by the page's pattern (empty for static matches)
    pub params: RouteParams,
}

/// Find the page whose route matches `path`.
///
/// Returns `None` when nothing matches; an unknown route is not an error.
pub fn match_path<'a>(navigation: &'a Navigation, path: &str) -> Option<&'a NavigationPageItem> {
    match_page(navigation, path).map(|found| found.item)
}

/// Like [`match_path`], also returning the page's structural path and the
/// parameters bound by its pattern.
pub fn match_page<'a>(navigation: &'a Navigation, path: &str) -> Option<PageMatch<'a>> {
    let found = match_in(navigation, "", path);

    trace_log!(
        "match_page('{}') → {}",
        path,
        found
            .as_ref()
            .map_or_else(|| "no match".to_string(), |m| format!("'{}'", m.path))
    );

    found
}

fn match_in<'a>(navigation: &'a Navigation, prefix: &str, path: &str) -> Option<PageMatch<'a>> {
    for page in navigation.iter().filter_map(NavigationItem::as_page) {
        let composed = compose_path(prefix, page);

        if let Some(params) = match_item(page, prefix, &composed, path) {
            return Some(PageMatch {
                item: page,
                path: display_path(&composed),
                params,
            });
        }

        if page.has_children() {
            if let Some(found) = match_in(page.get_children(), &composed, path) {
                return Some(found);
            }
        }
    }

    None
}

fn match_item(
    page: &NavigationPageItem,
    prefix: &str,
    composed: &str,
    path: &str,
) -> Option<RouteParams> {
    let Some(pattern) = page.compiled_pattern() else {
        return (display_path(composed) == path).then(RouteParams::new);
    };

    let compiled = pattern.ok()?;
    if !path.starts_with('/') {
        return None;
    }

    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() {
        compiled.match_segments(&[])
    } else {
        compiled.matches(rest)
    }
}

/// Title of a page, or `""` when it has none.
pub fn item_title(item: &NavigationPageItem) -> &str {
    item.get_title().unwrap_or_default()
}

/// Structural path of `item` inside `navigation`.
///
/// Pages without a segment share their parent's path; the root page is `/`.
/// Pattern pages return their static path, not an instantiated URL.
/// Returns `None` when `item` is not part of `navigation` (lookup is by
/// identity, not by value).
pub fn item_path(navigation: &Navigation, item: &NavigationPageItem) -> Option<String> {
    find_path(navigation, "", item).map(|raw| display_path(&raw))
}

fn find_path(navigation: &Navigation, prefix: &str, target: &NavigationPageItem) -> Option<String> {
    for page in navigation.iter().filter_map(NavigationItem::as_page) {
        let composed = compose_path(prefix, page);
        if ptr::eq(page, target) {
            return Some(composed);
        }
        if let Some(found) = find_path(page.get_children(), &composed, target) {
            return Some(found);
        }
    }
    None
}

/// Split a path into its non-empty components.
///
/// ```
/// use dashboard_navigator::split_path;
///
/// assert_eq!(split_path("/users/123"), vec!["users", "123"]);
/// assert_eq!(split_path("/"), Vec::<&str>::new());
/// assert_eq!(split_path("/users/"), vec!["users"]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
