//! Active page resolution for dashboard navigation trees.
//!
//! A dashboard shell renders a sidebar from a declarative [`Navigation`]
//! tree and a page header with a title and breadcrumbs. This crate is the
//! engine behind both: given the tree and the current pathname it finds the
//! active page and builds its breadcrumb trail.
//!
//! - [`match_path`] / [`match_page`]: which page matches a path (static
//!   segments, `:param` patterns, nested pages; first match wins).
//! - [`item_title`] / [`item_path`]: a page's display title and structural
//!   path.
//! - [`use_active_page`]: the [`ActivePage`] (title, path, source path,
//!   breadcrumbs) for a pathname.
//! - [`ActivePageResolver`]: the same, memoized per pathname (`cache`
//!   feature).
//! - [`Router`] / [`MemoryRouter`]: the routing adapter seam.
//! - [`PageHeader`]: header title and breadcrumbs with page overrides.
//!
//! # Example
//!
//! ```
//! use dashboard_navigator::{use_active_page, Breadcrumb, Navigation, NavigationItem, NavigationPageItem};
//!
//! let navigation = Navigation::from(vec![
//!     NavigationPageItem::new().segment("").title("Home").into(),
//!     NavigationItem::header("Sales"),
//!     NavigationPageItem::new()
//!         .segment("orders")
//!         .title("Orders")
//!         .pattern("orders/:id")
//!         .into(),
//! ]);
//!
//! let page = use_active_page(&navigation, "/orders/123").unwrap();
//! assert_eq!(page.title, "Orders");
//! assert_eq!(page.path, "/orders");
//! assert_eq!(page.source_path, "/orders/123");
//! assert_eq!(page.params.get("id"), Some(&"123".to_string()));
//! assert_eq!(
//!     page.breadcrumbs,
//!     vec![Breadcrumb::new("Home", "/"), Breadcrumb::new("Orders", "/orders")]
//! );
//! ```
//!
//! # Features
//!
//! | Feature   | Default | Purpose                                    |
//! |-----------|---------|--------------------------------------------|
//! | `log`     | yes     | diagnostics through the `log` crate        |
//! | `tracing` | no      | diagnostics through `tracing` instead      |
//! | `cache`   | yes     | LRU memoization in [`ActivePageResolver`]  |
//! | `serde`   | yes     | (de)serialize navigation trees and results |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

pub mod active_page;
#[cfg(feature = "cache")]
pub mod cache;
pub mod error;
pub mod matching;
pub mod navigation;
pub mod page_header;
pub mod params;
pub mod pattern;
pub mod resolver;
pub mod router;

pub use active_page::{
    active_page_for_router, resolve_active_page, use_active_page, ActivePage, Breadcrumb,
    BreadcrumbStrategy,
};
#[cfg(feature = "cache")]
pub use cache::{ActivePageCache, CacheStats};
pub use error::NavigationError;
pub use matching::{item_path, item_title, match_page, match_path, split_path, PageMatch};
pub use navigation::{Navigation, NavigationItem, NavigationPageItem, PageEntry};
pub use page_header::PageHeader;
pub use params::{QueryParams, RouteParams};
pub use pattern::{Repeat, RoutePattern};
pub use resolver::{ActivePageResolver, ResolverConfig, DEFAULT_CACHE_CAPACITY};
pub use router::{HistoryMode, MemoryRouter, NavigateOptions, Router};
