//! Memoizing active page resolver.
//!
//! [`ActivePageResolver`] owns a shared navigation tree and answers "what is
//! the active page for this pathname?" for a rendering layer that asks on
//! every frame. With the `cache` feature, repeated questions about the same
//! pathname return the same `Arc<ActivePage>`, so the caller can skip work
//! with a cheap [`Arc::ptr_eq`]. Results are equal with or without the cache.
//!
//! ```
//! use std::sync::Arc;
//! use dashboard_navigator::{ActivePageResolver, Navigation, NavigationPageItem};
//!
//! let navigation = Navigation::from(vec![
//!     NavigationPageItem::new().segment("").title("Home").into(),
//!     NavigationPageItem::new().segment("orders").title("Orders").into(),
//! ]);
//!
//! let mut resolver = ActivePageResolver::new(navigation);
//! let first = resolver.resolve("/orders").unwrap();
//! let second = resolver.resolve("/orders").unwrap();
//! assert_eq!(first, second);
//! assert_eq!(first.title, "Orders");
//! ```

use crate::active_page::{resolve_active_page, ActivePage, BreadcrumbStrategy};
#[cfg(feature = "cache")]
use crate::cache::{ActivePageCache, CacheStats};
use crate::error::NavigationError;
use crate::navigation::Navigation;
use crate::router::{current_pathname, Router};
use crate::info_log;
use std::sync::Arc;

/// Default number of pathnames remembered by the resolver.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Resolver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Breadcrumb collection strategy
    pub strategy: BreadcrumbStrategy,
    /// Maximum number of memoized pathnames (must be non-zero)
    pub cache_capacity: usize,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: BreadcrumbStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    fn validate(&self) -> Result<(), NavigationError> {
        if self.cache_capacity == 0 {
            return Err(NavigationError::InvalidConfig {
                message: "cache capacity must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strategy: BreadcrumbStrategy::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Active page resolver bound to one navigation tree.
#[derive(Debug)]
pub struct ActivePageResolver {
    navigation: Arc<Navigation>,
    config: ResolverConfig,
    #[cfg(feature = "cache")]
    cache: ActivePageCache,
}

impl ActivePageResolver {
    /// Create a resolver with the default configuration.
    pub fn new(navigation: impl Into<Arc<Navigation>>) -> Self {
        Self {
            navigation: navigation.into(),
            config: ResolverConfig::default(),
            #[cfg(feature = "cache")]
            cache: ActivePageCache::new(),
        }
    }

    /// Create a resolver with an explicit configuration.
    pub fn with_config(
        navigation: impl Into<Arc<Navigation>>,
        config: ResolverConfig,
    ) -> Result<Self, NavigationError> {
        config.validate()?;
        Ok(Self {
            navigation: navigation.into(),
            config,
            #[cfg(feature = "cache")]
            cache: ActivePageCache::with_capacity(config.cache_capacity)?,
        })
    }

    pub fn navigation(&self) -> &Arc<Navigation> {
        &self.navigation
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Swap in a new navigation tree.
    ///
    /// Memoized pages are dropped unless `navigation` is the same `Arc` as the
    /// current tree.
    pub fn set_navigation(&mut self, navigation: impl Into<Arc<Navigation>>) {
        let navigation = navigation.into();
        if Arc::ptr_eq(&self.navigation, &navigation) {
            return;
        }
        info_log!("Navigation tree replaced ({} top-level items)", navigation.len());
        self.navigation = navigation;
        self.clear_cache();
    }

    /// Resolve the active page for `pathname`.
    pub fn resolve(&mut self, pathname: &str) -> Option<Arc<ActivePage>> {
        #[cfg(feature = "cache")]
        if let Some(cached) = self.cache.get(pathname) {
            return cached;
        }

        let page = resolve_active_page(&self.navigation, pathname, self.config.strategy).map(Arc::new);

        #[cfg(feature = "cache")]
        self.cache.insert(pathname.to_string(), page.clone());

        page
    }

    /// Resolve the active page for the router's current pathname.
    pub fn resolve_router<R: Router + ?Sized>(&mut self, router: &R) -> Option<Arc<ActivePage>> {
        self.resolve(current_pathname(router))
    }

    /// Forget every memoized page.
    pub fn clear_cache(&mut self) {
        #[cfg(feature = "cache")]
        self.cache.clear();
    }

    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationPageItem;
    use crate::router::{MemoryRouter, NavigateOptions};

    fn navigation() -> Navigation {
        Navigation::from(vec![
            NavigationPageItem::new().segment("").title("Home").into(),
            NavigationPageItem::new()
                .segment("orders")
                .title("Orders")
                .pattern("orders/:id")
                .into(),
        ])
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let config = ResolverConfig::new().with_cache_capacity(0);
        assert!(matches!(
            ActivePageResolver::with_config(navigation(), config),
            Err(NavigationError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_resolve_router() {
        let mut resolver = ActivePageResolver::new(navigation());
        let mut router = MemoryRouter::new("/");
        assert_eq!(resolver.resolve_router(&router).unwrap().title, "Home");

        router.navigate("/orders/9?tab=items", NavigateOptions::default());
        let page = resolver.resolve_router(&router).unwrap();
        assert_eq!(page.source_path, "/orders/9");
        assert_eq!(page.params.get_as::<u32>("id"), Some(9));
    }

    #[test]
    fn test_strategy_from_config() {
        let config = ResolverConfig::new().with_strategy(BreadcrumbStrategy::SegmentRewrite);
        let resolver = ActivePageResolver::with_config(navigation(), config).unwrap();
        assert_eq!(resolver.config().strategy, BreadcrumbStrategy::SegmentRewrite);
    }

    #[cfg(feature = "cache")]
    #[test]
    fn test_repeated_resolve_returns_same_arc() {
        let mut resolver = ActivePageResolver::new(navigation());
        let first = resolver.resolve("/orders/1").unwrap();
        let second = resolver.resolve("/orders/1").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(resolver.cache_stats().hits, 1);

        assert!(resolver.resolve("/missing").is_none());
        assert!(resolver.resolve("/missing").is_none());
        assert_eq!(resolver.cache_stats().hits, 2);
    }

    #[cfg(feature = "cache")]
    #[test]
    fn test_set_navigation_invalidates() {
        let shared = Arc::new(navigation());
        let mut resolver = ActivePageResolver::new(Arc::clone(&shared));
        let before = resolver.resolve("/").unwrap();

        resolver.set_navigation(Arc::clone(&shared));
        assert_eq!(resolver.cache_stats().invalidations, 0);
        assert!(Arc::ptr_eq(&before, &resolver.resolve("/").unwrap()));

        resolver.set_navigation(Navigation::from(vec![NavigationPageItem::new()
            .segment("")
            .title("Dashboard")
            .into()]));
        assert_eq!(resolver.cache_stats().invalidations, 1);
        assert_eq!(resolver.resolve("/").unwrap().title, "Dashboard");
    }
}
