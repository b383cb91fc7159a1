//! Page header derivation.
//!
//! A page container shows a title and a breadcrumb bar. Both default to the
//! active page and can be overridden by the page itself.

use crate::active_page::{ActivePage, Breadcrumb};

/// Title and breadcrumbs to show above a page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageHeader {
    pub title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl PageHeader {
    /// Combine caller overrides with the active page.
    ///
    /// Each override wins when given; otherwise the active page's value is
    /// used, and without an active page the title is `""` and the trail is
    /// empty.
    ///
    /// ```
    /// use dashboard_navigator::{use_active_page, Navigation, NavigationPageItem, PageHeader};
    ///
    /// let navigation = Navigation::from(vec![
    ///     NavigationPageItem::new().segment("orders").title("Orders").into(),
    /// ]);
    /// let active = use_active_page(&navigation, "/orders");
    ///
    /// let header = PageHeader::resolve(active.as_ref(), Some("Order #7"), None);
    /// assert_eq!(header.title, "Order #7");
    /// assert_eq!(header.breadcrumbs.len(), 1);
    /// ```
    pub fn resolve(
        active: Option<&ActivePage>,
        title: Option<&str>,
        breadcrumbs: Option<Vec<Breadcrumb>>,
    ) -> Self {
        let title = title
            .map(str::to_string)
            .or_else(|| active.map(|page| page.title.clone()))
            .unwrap_or_default();
        let breadcrumbs = breadcrumbs
            .or_else(|| active.map(|page| page.breadcrumbs.clone()))
            .unwrap_or_default();

        Self { title, breadcrumbs }
    }

    /// Every crumb except the last, which is rendered as plain text.
    pub fn links(&self) -> &[Breadcrumb] {
        match self.breadcrumbs.split_last() {
            Some((_, links)) => links,
            None => &[],
        }
    }

    /// The last crumb (the page being shown).
    pub fn current(&self) -> Option<&Breadcrumb> {
        self.breadcrumbs.last()
    }

    /// `true` when there is a title to render.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RouteParams;

    fn active() -> ActivePage {
        ActivePage {
            title: "Orders".to_string(),
            path: "/orders".to_string(),
            source_path: "/orders/3".to_string(),
            breadcrumbs: vec![Breadcrumb::new("Home", "/"), Breadcrumb::new("Orders", "/orders")],
            params: RouteParams::new(),
        }
    }

    #[test]
    fn test_defaults_to_active_page() {
        let page = active();
        let header = PageHeader::resolve(Some(&page), None, None);
        assert_eq!(header.title, "Orders");
        assert_eq!(header.breadcrumbs, page.breadcrumbs);
        assert_eq!(header.links(), &[Breadcrumb::new("Home", "/")]);
        assert_eq!(header.current(), Some(&Breadcrumb::new("Orders", "/orders")));
    }

    #[test]
    fn test_overrides_win() {
        let page = active();
        let crumbs = vec![Breadcrumb::new("Custom", "/custom")];
        let header = PageHeader::resolve(Some(&page), Some(""), Some(crumbs.clone()));
        assert_eq!(header.title, "");
        assert!(!header.has_title());
        assert_eq!(header.breadcrumbs, crumbs);
        assert!(header.links().is_empty());
    }

    #[test]
    fn test_no_active_page() {
        let header = PageHeader::resolve(None, None, None);
        assert_eq!(header, PageHeader::default());
        assert!(header.current().is_none());
        assert!(header.links().is_empty());
    }
}
