//! Active page resolution.
//!
//! Given a navigation tree and the current pathname, [`use_active_page`]
//! derives the page being shown: its title, its structural path, the literal
//! pathname that produced it and a root-to-leaf breadcrumb trail.
//!
//! Resolution is a pure function of `(navigation, pathname)`: no state is
//! kept between calls, so calling it again with the same inputs yields an
//! equal [`ActivePage`]. Memoization lives one level up, in
//! [`ActivePageResolver`](crate::ActivePageResolver).
//!
//! # Breadcrumbs
//!
//! For `/home/orders` on the tree
//!
//! ```text
//! ""        "ACME"
//! "home"    "Home"
//!   "orders" "Orders"
//! ```
//!
//! the trail is `ACME (/) → Home (/home) → Orders (/home/orders)`:
//!
//! 1. the root page (the match for `/`), if any, seeds the trail;
//! 2. each prefix of the pathname (`/home`, `/home/orders`) that matches a
//!    page adds that page's title and structural path;
//! 3. a crumb whose path equals the previous crumb's path is dropped.
//!
//! ```
//! use dashboard_navigator::{use_active_page, Breadcrumb, Navigation, NavigationPageItem};
//!
//! let navigation = Navigation::from(vec![
//!     NavigationPageItem::new().segment("").title("ACME").into(),
//!     NavigationPageItem::new()
//!         .segment("home")
//!         .title("Home")
//!         .children(vec![NavigationPageItem::new().segment("orders").title("Orders")])
//!         .into(),
//! ]);
//!
//! let page = use_active_page(&navigation, "/home/orders").unwrap();
//! assert_eq!(page.title, "Orders");
//! assert_eq!(
//!     page.breadcrumbs,
//!     vec![
//!         Breadcrumb::new("ACME", "/"),
//!         Breadcrumb::new("Home", "/home"),
//!         Breadcrumb::new("Orders", "/home/orders"),
//!     ]
//! );
//! ```

use crate::matching::{item_title, match_page, match_path, split_path, PageMatch};
use crate::navigation::Navigation;
use crate::params::RouteParams;
use crate::router::{current_pathname, Router};
use crate::{debug_log, trace_log};

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breadcrumb {
    /// Title of the page, `""` if it has none
    pub title: String,
    /// Structural path the crumb links to
    pub path: String,
}

impl Breadcrumb {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }

    fn from_match(found: &PageMatch<'_>) -> Self {
        Self::new(item_title(found.item), found.path.clone())
    }
}

/// The page matched for the current pathname.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActivePage {
    /// Title of the matched page
    pub title: String,
    /// Structural path of the matched page (no pattern values substituted)
    pub path: String,
    /// The pathname that was resolved, as given
    pub source_path: String,
    /// Root-to-leaf trail, without consecutive duplicate paths
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Values bound by the matched page's pattern
    pub params: RouteParams,
}

/// How breadcrumbs are collected for pages matched through a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreadcrumbStrategy {
    /// Walk every prefix of the literal pathname.
    #[default]
    Prefix,
    /// When the matched page's structural path differs from the pathname
    /// (a pattern deep link such as `/orders/123` for `/orders`), walk the
    /// structural path instead and finish the trail with the matched page.
    SegmentRewrite,
}

/// Resolve the active page for `pathname` with the default
/// [`BreadcrumbStrategy::Prefix`].
///
/// Returns `None` when no page matches; the caller decides what to render.
pub fn use_active_page(navigation: &Navigation, pathname: &str) -> Option<ActivePage> {
    resolve_active_page(navigation, pathname, BreadcrumbStrategy::Prefix)
}

/// Resolve the active page for the router's current pathname.
///
/// An empty pathname is read as `/`, so a router that reports `""` for the
/// site root still resolves the root page. Calling [`use_active_page`] with
/// `""` directly matches nothing.
pub fn active_page_for_router<R>(navigation: &Navigation, router: &R) -> Option<ActivePage>
where
    R: Router + ?Sized,
{
    use_active_page(navigation, current_pathname(router))
}

/// Resolve the active page for `pathname` using `strategy` for breadcrumbs.
pub fn resolve_active_page(
    navigation: &Navigation,
    pathname: &str,
    strategy: BreadcrumbStrategy,
) -> Option<ActivePage> {
    let Some(active) = match_page(navigation, pathname) else {
        debug_log!("No active page for '{}'", pathname);
        return None;
    };

    let seed = match_path(navigation, "/")
        .map(|root| vec![Breadcrumb::new(item_title(root), "/")])
        .unwrap_or_default();

    let breadcrumbs = match strategy {
        BreadcrumbStrategy::SegmentRewrite if active.path != pathname => {
            debug_log!(
                "Rewriting breadcrumb walk for '{}' to structural path '{}'",
                pathname,
                active.path
            );
            let crumbs = collect_breadcrumbs(navigation, &active.path, seed);
            push_distinct(crumbs, Breadcrumb::from_match(&active))
        }
        _ => collect_breadcrumbs(navigation, pathname, seed),
    };

    trace_log!(
        "Active page for '{}': '{}' at '{}' ({} breadcrumbs)",
        pathname,
        item_title(active.item),
        active.path,
        breadcrumbs.len()
    );

    Some(ActivePage {
        title: item_title(active.item).to_string(),
        path: active.path,
        source_path: pathname.to_string(),
        breadcrumbs,
        params: active.params,
    })
}

/// Fold the path's prefixes into the trail started by `seed`.
fn collect_breadcrumbs(navigation: &Navigation, path: &str, seed: Vec<Breadcrumb>) -> Vec<Breadcrumb> {
    split_path(path)
        .into_iter()
        .fold((String::new(), seed), |(prefix, crumbs), segment| {
            let prefix = format!("{}/{}", prefix, segment);
            let crumbs = match match_page(navigation, &prefix) {
                Some(found) => push_distinct(crumbs, Breadcrumb::from_match(&found)),
                None => crumbs,
            };
            (prefix, crumbs)
        })
        .1
}

fn push_distinct(mut crumbs: Vec<Breadcrumb>, crumb: Breadcrumb) -> Vec<Breadcrumb> {
    if crumbs.last().map_or(true, |last| last.path != crumb.path) {
        crumbs.push(crumb);
    }
    crumbs
}
