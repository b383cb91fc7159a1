//! Loading navigation trees from JSON and serializing results.

#![cfg(feature = "serde")]

mod common;

use common::*;
use dashboard_navigator::*;
use serde_json::json;

#[test]
fn test_load_navigation_from_json() {
    let navigation: Navigation = serde_json::from_value(json!([
        { "segment": "", "title": "Dashboard", "icon": "dashboard" },
        { "kind": "header", "title": "Sales" },
        {
            "segment": "orders",
            "title": "Orders",
            "action": { "badge": 3 },
            "children": [
                { "title": "All orders" },
                { "segment": "pending", "title": "Pending" },
                { "segment": "order", "title": "Order", "pattern": "order/:orderId", "hidden": true }
            ]
        },
        { "segment": "customers", "title": "Customers", "pattern": "customers/:customerId?" },
        { "kind": "divider" },
        { "kind": "header", "title": "Analytics" },
        {
            "kind": "page",
            "segment": "reports",
            "title": "Reports",
            "children": [
                { "segment": "sales", "title": "Sales" },
                { "segment": "traffic", "title": "Traffic" }
            ]
        },
        { "segment": "files", "title": "Files", "pattern": "files/:path*" }
    ]))
    .unwrap();

    assert_eq!(navigation, dashboard_navigation());
}

#[test]
fn test_header_without_title_is_rejected() {
    let result: Result<Navigation, _> = serde_json::from_value(json!([{ "kind": "header" }]));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("header item requires a title"), "{}", err);
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result: Result<Navigation, _> = serde_json::from_value(json!([{ "kind": "spacer" }]));
    assert!(result.is_err());
}

#[test]
fn test_navigation_round_trip() {
    let navigation = dashboard_navigation();
    let value = serde_json::to_value(&navigation).unwrap();

    assert_eq!(value[0], json!({ "segment": "", "title": "Dashboard" }));
    assert_eq!(value[1], json!({ "kind": "header", "title": "Sales" }));
    assert_eq!(value[4], json!({ "kind": "divider" }));

    let back: Navigation = serde_json::from_value(value).unwrap();
    assert_eq!(back, navigation);
}

#[test]
fn test_active_page_serialization() {
    let page = use_active_page(&pattern_navigation(), "/orders/42").unwrap();
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(
        value,
        json!({
            "title": "Orders",
            "path": "/orders",
            "sourcePath": "/orders/42",
            "breadcrumbs": [
                { "title": "Home", "path": "/" },
                { "title": "Orders", "path": "/orders" }
            ],
            "params": { "id": "42" }
        })
    );

    let back: ActivePage = serde_json::from_value(value).unwrap();
    assert_eq!(back, page);
}
