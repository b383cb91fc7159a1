//! Shared navigation fixtures for integration tests.

#![allow(dead_code)]

use dashboard_navigator::*;

/// Start a page with a segment and a title.
pub fn page(segment: &str, title: &str) -> NavigationPageItem {
    NavigationPageItem::new().segment(segment).title(title)
}

/// `[{segment:"",title:"Home"},{segment:"orders",title:"Orders"}]`
pub fn flat_navigation() -> Navigation {
    Navigation::from(vec![page("", "Home").into(), page("orders", "Orders").into()])
}

/// `[{segment:"",title:"ACME"},{segment:"home",title:"Home",children:[{segment:"orders",title:"Orders"}]}]`
pub fn nested_navigation() -> Navigation {
    Navigation::from(vec![
        page("", "ACME").into(),
        page("home", "Home")
            .children(vec![page("orders", "Orders")])
            .into(),
    ])
}

/// `[{segment:"",title:"Home"},{segment:"orders",title:"Orders",pattern:"orders/:id"}]`
pub fn pattern_navigation() -> Navigation {
    Navigation::from(vec![
        page("", "Home").into(),
        page("orders", "Orders").pattern("orders/:id").into(),
    ])
}

/// `[{segment:"users",title:"Users",children:[{segment:"invoices",title:"Invoices",pattern:"invoices/:id"}]}]`
pub fn nested_pattern_navigation() -> Navigation {
    Navigation::from(vec![page("users", "Users")
        .children(vec![page("invoices", "Invoices").pattern("invoices/:id")])
        .into()])
}

/// A realistic dashboard: headers, dividers, index pages, hidden pages,
/// nested static and dynamic routes.
pub fn dashboard_navigation() -> Navigation {
    Navigation::from(vec![
        page("", "Dashboard").into(),
        NavigationItem::header("Sales"),
        page("orders", "Orders")
            .children(vec![
                NavigationItem::from(NavigationPageItem::new().title("All orders")),
                page("pending", "Pending").into(),
                page("order", "Order").pattern("order/:orderId").hidden(true).into(),
            ])
            .into(),
        page("customers", "Customers")
            .pattern("customers/:customerId?")
            .into(),
        NavigationItem::divider(),
        NavigationItem::header("Analytics"),
        page("reports", "Reports")
            .children(vec![
                page("sales", "Sales"),
                page("traffic", "Traffic"),
            ])
            .into(),
        page("files", "Files").pattern("files/:path*").into(),
    ])
}

/// Statically routed pages (no pattern) that own their path: a static page
/// sharing its path with an earlier one is shadowed and left out.
pub fn reachable_static_pages(navigation: &Navigation) -> Vec<&NavigationPageItem> {
    let mut seen = std::collections::HashSet::new();
    navigation
        .pages()
        .into_iter()
        .filter(|entry| entry.item.get_pattern().is_none())
        .filter(|entry| seen.insert(entry.path.clone()))
        .map(|entry| entry.item)
        .collect()
}

/// Assert a breadcrumb trail as `(title, path)` pairs.
pub fn assert_breadcrumbs(page: &ActivePage, expected: &[(&str, &str)]) {
    let actual: Vec<(&str, &str)> = page
        .breadcrumbs
        .iter()
        .map(|crumb| (crumb.title.as_str(), crumb.path.as_str()))
        .collect();
    assert_eq!(actual, expected, "breadcrumbs for '{}'", page.source_path);
}
