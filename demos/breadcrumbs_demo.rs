//! Breadcrumbs Demo
//!
//! Walks a dashboard navigation tree with an in-memory router and prints the
//! header (title and breadcrumb trail) for each location.
//!
//! Run with `RUST_LOG=trace` to see matching diagnostics.

use dashboard_navigator::{
    ActivePageResolver, HistoryMode, MemoryRouter, NavigateOptions, Navigation, NavigationItem,
    NavigationPageItem, PageHeader, Router,
};

fn page(segment: &str, title: &str) -> NavigationPageItem {
    NavigationPageItem::new().segment(segment).title(title)
}

fn navigation() -> Navigation {
    Navigation::from(vec![
        page("", "Dashboard").into(),
        NavigationItem::header("Sales"),
        page("orders", "Orders")
            .child(page("pending", "Pending"))
            .child(page("order", "Order").pattern("order/:orderId").hidden(true))
            .into(),
        page("customers", "Customers")
            .pattern("customers/:customerId?")
            .into(),
        NavigationItem::divider(),
        NavigationItem::header("Analytics"),
        page("reports", "Reports")
            .children(vec![page("sales", "Sales"), page("traffic", "Traffic")])
            .into(),
    ])
}

fn print_header(resolver: &mut ActivePageResolver, router: &MemoryRouter) {
    let active = resolver.resolve_router(router);
    let header = PageHeader::resolve(active.as_deref(), None, None);

    println!("{}", router.pathname());
    let Some(page) = &active else {
        println!("  (no page)");
        return;
    };

    let trail: Vec<_> = header
        .breadcrumbs
        .iter()
        .map(|crumb| format!("{} ({})", crumb.title, crumb.path))
        .collect();
    println!("  title:  {}", header.title);
    println!("  trail:  {}", trail.join(" > "));
    if !page.params.is_empty() {
        let params: Vec<_> = page
            .params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        println!("  params: {}", params.join(", "));
    }
}

fn main() {
    env_logger::init();

    let mut resolver = ActivePageResolver::new(navigation());
    let mut router = MemoryRouter::new("/");
    print_header(&mut resolver, &router);

    for url in [
        "/orders",
        "/orders/pending",
        "/orders/order/1042?tab=items",
        "/customers/7",
        "/reports/traffic",
        "/settings",
    ] {
        router.navigate(url, NavigateOptions::default());
        print_header(&mut resolver, &router);
    }

    router.navigate(
        "/reports/sales",
        NavigateOptions::new().history(HistoryMode::Replace),
    );
    print_header(&mut resolver, &router);

    while router.back() {
        print_header(&mut resolver, &router);
    }

    let stats = resolver.cache_stats();
    println!(
        "\ncache: {} hits, {} misses ({:.0}% hit rate)",
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    );
}
