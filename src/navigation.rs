//! Navigation model.
//!
//! A [`Navigation`] is the ordered, declarative tree an application hands to
//! the dashboard shell. It holds three kinds of [`NavigationItem`]:
//!
//! - **Page** ([`NavigationPageItem`]): contributes an optional URL
//!   `segment`, an optional `title`, an optional dynamic `pattern` and
//!   nested `children`.
//! - **Header**: a group label in the rendered menu.
//! - **Divider**: a separator in the rendered menu.
//!
//! Only pages take part in path matching. Headers and dividers keep their
//! position for the menu but are skipped by every traversal here.
//!
//! # Composed paths
//!
//! A page's composed path is its ancestors' segments joined with its own:
//!
//! ```text
//! ""            (title "Home")     → /
//! "home"        (title "Home")     → /home
//!   "orders"    (title "Orders")   → /home/orders
//!   ""          (title "Overview") → /home        (inherits parent's path)
//! ```
//!
//! A page without a segment (or with an empty one) adds nothing to the URL.
//! At the top level that makes it the root page, matched by `/`.
//!
//! # Examples
//!
//! ```
//! use dashboard_navigator::{Navigation, NavigationItem, NavigationPageItem};
//!
//! let navigation = Navigation::from(vec![
//!     NavigationPageItem::new().segment("").title("Home").into(),
//!     NavigationItem::header("Main"),
//!     NavigationPageItem::new()
//!         .segment("orders")
//!         .title("Orders")
//!         .pattern("orders/:id")
//!         .into(),
//!     NavigationItem::divider(),
//! ]);
//!
//! let paths: Vec<_> = navigation.pages().into_iter().map(|p| p.path).collect();
//! assert_eq!(paths, vec!["/", "/orders"]);
//! ```

use crate::error::NavigationError;
use crate::pattern::RoutePattern;
use std::slice;

/// A page's `pattern` together with its compiled template.
#[derive(Debug, Clone, PartialEq)]
struct PagePattern {
    source: String,
    compiled: Result<RoutePattern, NavigationError>,
}

impl PagePattern {
    fn new(source: String) -> Self {
        let compiled = RoutePattern::parse(&source);
        Self { source, compiled }
    }
}

/// A navigable page in the navigation tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationPageItem {
    segment: Option<String>,
    title: Option<String>,
    pattern: Option<PagePattern>,
    children: Navigation,
    hidden: bool,
}

impl NavigationPageItem {
    /// Create a page with no segment, title, pattern or children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL segment this page contributes. An empty segment inherits
    /// the parent's path.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Set the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a dynamic route template, relative to the parent's path
    /// (e.g. `"orders/:id"`).
    ///
    /// The template is compiled here. One that does not compile never
    /// matches; [`Navigation::validate`] reports it.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(PagePattern::new(pattern.into()));
        self
    }

    /// Replace the nested pages.
    pub fn children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NavigationItem>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Append one nested item.
    pub fn child(mut self, child: impl Into<NavigationItem>) -> Self {
        self.children.0.push(child.into());
        self
    }

    /// Hide this page from rendered menus. Hidden pages are still matched.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn get_segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn get_pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|pattern| pattern.source.as_str())
    }

    /// The compiled pattern, or why it failed to compile.
    pub(crate) fn compiled_pattern(&self) -> Option<Result<&RoutePattern, &NavigationError>> {
        self.pattern.as_ref().map(|pattern| pattern.compiled.as_ref())
    }

    pub fn get_children(&self) -> &Navigation {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// `true` if this page contributes a URL component of its own.
    pub fn has_segment(&self) -> bool {
        self.segment.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// One entry of a [`Navigation`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationItem {
    /// A navigable page
    Page(NavigationPageItem),
    /// A non-navigable group label
    Header { title: String },
    /// A non-navigable separator
    Divider,
}

impl NavigationItem {
    /// Shorthand for `NavigationItem::Page(item)`.
    pub fn page(item: NavigationPageItem) -> Self {
        NavigationItem::Page(item)
    }

    /// Create a header item.
    pub fn header(title: impl Into<String>) -> Self {
        NavigationItem::Header {
            title: title.into(),
        }
    }

    /// Create a divider item.
    pub fn divider() -> Self {
        NavigationItem::Divider
    }

    /// Return the page if this item is one.
    pub fn as_page(&self) -> Option<&NavigationPageItem> {
        match self {
            NavigationItem::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn is_page(&self) -> bool {
        matches!(self, NavigationItem::Page(_))
    }
}

impl From<NavigationPageItem> for NavigationItem {
    fn from(item: NavigationPageItem) -> Self {
        NavigationItem::Page(item)
    }
}

/// An ordered navigation tree.
///
/// Order matters for rendering and for breaking ties between pages that
/// match the same path (first match wins).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Navigation(Vec<NavigationItem>);

impl Navigation {
    /// Create an empty navigation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> slice::Iter<'_, NavigationItem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.0
    }

    /// Check every page pattern, returning the first that does not compile
    /// (in pre-order).
    ///
    /// Matching never fails on a malformed pattern, the page just never
    /// matches. Call this where the tree is built to catch such pages early.
    ///
    /// ```
    /// use dashboard_navigator::{Navigation, NavigationError, NavigationPageItem};
    ///
    /// let navigation = Navigation::from(vec![
    ///     NavigationPageItem::new().segment("orders").pattern("orders/:").into(),
    /// ]);
    /// assert!(matches!(
    ///     navigation.validate(),
    ///     Err(NavigationError::InvalidPattern { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), NavigationError> {
        match self
            .pages()
            .into_iter()
            .find_map(|entry| entry.item.compiled_pattern().and_then(Result::err))
        {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Every page of the tree in depth-first pre-order, with composed paths.
    pub fn pages(&self) -> Vec<PageEntry<'_>> {
        let mut entries = Vec::new();
        collect_pages(self, "", 0, &mut entries);
        entries
    }
}

impl From<Vec<NavigationItem>> for Navigation {
    fn from(items: Vec<NavigationItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<NavigationItem> for Navigation {
    fn from_iter<I: IntoIterator<Item = NavigationItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Navigation {
    type Item = &'a NavigationItem;
    type IntoIter = slice::Iter<'a, NavigationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A page together with its position in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry<'a> {
    /// The page itself
    pub item: &'a NavigationPageItem,
    /// Composed path of the parent (`""` at the top level)
    pub prefix: String,
    /// Composed path of this page (`"/"` for the root page)
    pub path: String,
    /// Nesting level (0 = top level)
    pub depth: usize,
}

/// Compose a page's raw path from its parent's raw path.
///
/// Raw paths use `""` for the root, which [`display_path`] turns into `"/"`.
pub(crate) fn compose_path(prefix: &str, item: &NavigationPageItem) -> String {
    match item.get_segment() {
        Some(segment) if !segment.is_empty() => format!("{prefix}/{segment}"),
        _ => prefix.to_string(),
    }
}

/// Turn a raw composed path into the absolute path used for matching.
pub(crate) fn display_path(raw: &str) -> String {
    if raw.is_empty() {
        "/".to_string()
    } else {
        raw.to_string()
    }
}

fn collect_pages<'a>(
    navigation: &'a Navigation,
    prefix: &str,
    depth: usize,
    entries: &mut Vec<PageEntry<'a>>,
) {
    for page in navigation.iter().filter_map(NavigationItem::as_page) {
        let raw = compose_path(prefix, page);
        entries.push(PageEntry {
            item: page,
            prefix: prefix.to_string(),
            path: display_path(&raw),
            depth,
        });
        collect_pages(page.get_children(), &raw, depth + 1, entries);
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Navigation, NavigationItem, NavigationPageItem, PagePattern};
    use crate::error::NavigationError;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum ItemKind {
        Page,
        Header,
        Divider,
    }

    /// Wire shape: `kind` is optional and defaults to a page. Unknown keys
    /// (icons, actions) belong to the menu layer and are ignored.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub(super) struct RawNavigationItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<ItemKind>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        segment: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
        #[serde(default, skip_serializing_if = "Navigation::is_empty")]
        children: Navigation,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        hidden: bool,
    }

    impl TryFrom<RawNavigationItem> for NavigationItem {
        type Error = NavigationError;

        fn try_from(raw: RawNavigationItem) -> Result<Self, Self::Error> {
            match raw.kind.unwrap_or(ItemKind::Page) {
                ItemKind::Page => Ok(NavigationItem::Page(NavigationPageItem {
                    segment: raw.segment,
                    title: raw.title,
                    pattern: raw.pattern.map(PagePattern::new),
                    children: raw.children,
                    hidden: raw.hidden,
                })),
                ItemKind::Header => {
                    let title = raw.title.ok_or_else(|| NavigationError::InvalidItem {
                        message: "header item requires a title".to_string(),
                    })?;
                    Ok(NavigationItem::Header { title })
                }
                ItemKind::Divider => Ok(NavigationItem::Divider),
            }
        }
    }

    impl From<NavigationItem> for RawNavigationItem {
        fn from(item: NavigationItem) -> Self {
            let empty = |kind| RawNavigationItem {
                kind: Some(kind),
                segment: None,
                title: None,
                pattern: None,
                children: Navigation::new(),
                hidden: false,
            };
            match item {
                NavigationItem::Page(page) => RawNavigationItem {
                    kind: None,
                    segment: page.segment,
                    title: page.title,
                    pattern: page.pattern.map(|pattern| pattern.source),
                    children: page.children,
                    hidden: page.hidden,
                },
                NavigationItem::Header { title } => RawNavigationItem {
                    title: Some(title),
                    ..empty(ItemKind::Header)
                },
                NavigationItem::Divider => empty(ItemKind::Divider),
            }
        }
    }

    impl Serialize for NavigationItem {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawNavigationItem::from(self.clone()).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for NavigationItem {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawNavigationItem::deserialize(deserializer)?;
            NavigationItem::try_from(raw).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Navigation {
        Navigation::from(vec![
            NavigationPageItem::new().segment("").title("ACME").into(),
            NavigationItem::header("Main"),
            NavigationPageItem::new()
                .segment("home")
                .title("Home")
                .children(vec![
                    NavigationPageItem::new().title("Overview"),
                    NavigationPageItem::new().segment("orders").title("Orders"),
                ])
                .into(),
            NavigationItem::divider(),
        ])
    }

    #[test]
    fn test_pages_skip_headers_and_dividers() {
        let navigation = sample();
        let titles: Vec<_> = navigation
            .pages()
            .iter()
            .map(|entry| entry.item.get_title().unwrap_or_default())
            .collect();
        assert_eq!(titles, vec!["ACME", "Home", "Overview", "Orders"]);
    }

    #[test]
    fn test_pages_composed_paths() {
        let navigation = sample();
        let pages = navigation.pages();
        let paths: Vec<_> = pages.iter().map(|entry| entry.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/home", "/home", "/home/orders"]);

        let depths: Vec<_> = pages.iter().map(|entry| entry.depth).collect();
        assert_eq!(depths, vec![0, 0, 1, 1]);
        assert_eq!(pages[3].prefix, "/home");
    }

    #[test]
    fn test_pattern_compiled_once_when_set() {
        let page = NavigationPageItem::new().segment("orders").pattern("orders/:id");
        assert_eq!(page.get_pattern(), Some("orders/:id"));
        let compiled = page.compiled_pattern().unwrap().unwrap();
        assert_eq!(compiled.param_names(), vec!["id"]);

        let bad = NavigationPageItem::new().pattern("orders/:");
        assert_eq!(bad.get_pattern(), Some("orders/:"));
        assert!(bad.compiled_pattern().unwrap().is_err());
        assert!(NavigationPageItem::new().compiled_pattern().is_none());
    }

    #[test]
    fn test_validate_reports_first_bad_pattern() {
        assert_eq!(sample().validate(), Ok(()));

        let navigation = Navigation::from(vec![NavigationPageItem::new()
            .segment("users")
            .children(vec![
                NavigationPageItem::new().segment("a").pattern("a/:x-y"),
                NavigationPageItem::new().segment("b").pattern("b/:"),
            ])
            .into()]);
        match navigation.validate() {
            Err(NavigationError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "a/:x-y"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_has_segment() {
        assert!(!NavigationPageItem::new().has_segment());
        assert!(!NavigationPageItem::new().segment("").has_segment());
        assert!(NavigationPageItem::new().segment("a").has_segment());
    }

    #[test]
    fn test_builder_child_appends() {
        let page = NavigationPageItem::new()
            .segment("users")
            .child(NavigationPageItem::new().segment("a"))
            .child(NavigationItem::divider())
            .hidden(true);
        assert_eq!(page.get_children().len(), 2);
        assert!(page.has_children());
        assert!(page.is_hidden());
        assert!(page.get_children().items()[0].is_page());
        assert!(!page.get_children().items()[1].is_page());
    }
}
