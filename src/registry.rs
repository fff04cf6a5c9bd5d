//! Keyword to handler registry
//!
//! Entries are kept in registration order and resolution returns the first
//! entry whose keyword occurs in the input name, so when several keywords match
//! the earliest registered one wins. Keywords are lower-cased on the way in and
//! names are lower-cased on lookup, which makes matching case-insensitive.

use crate::config::RouterConfig;
use crate::handlers::Handler;
use std::sync::Arc;
use tracing::{debug, warn};

/// Insertion-ordered keyword → handler mapping
#[derive(Default)]
pub struct HandlerRegistry {
    routes: Vec<(String, Arc<dyn Handler>)>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Build a registry from the configured route table
    pub fn from_config(config: &RouterConfig) -> Self {
        let mut registry = Self::new();
        for route in &config.routes {
            registry.register(&route.keyword, route.handler.build());
        }
        registry
    }

    /// Associate `keyword` with `handler`
    ///
    /// Re-registering a keyword replaces its handler but keeps the keyword's
    /// original position in the resolution order.
    pub fn register(&mut self, keyword: &str, handler: Arc<dyn Handler>) {
        let keyword = keyword.to_lowercase();

        if keyword.is_empty() {
            warn!("Registering empty keyword; it matches every input");
        }

        match self.routes.iter().position(|(k, _)| *k == keyword) {
            Some(index) => {
                debug!(keyword = %keyword, position = index, "Replacing handler for keyword");
                self.routes[index].1 = handler;
            }
            None => {
                debug!(keyword = %keyword, position = self.routes.len(), "Registered keyword");
                self.routes.push((keyword, handler));
            }
        }
    }

    /// Find the handler for `name`, or `None` if no keyword matches
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Handler>> {
        self.resolve_entry(name).map(|(_, handler)| handler)
    }

    /// Like [`resolve`](Self::resolve) but also returns the matching keyword
    pub fn resolve_entry(&self, name: &str) -> Option<(&str, Arc<dyn Handler>)> {
        let name = name.to_lowercase();
        self.routes
            .iter()
            .find(|(keyword, _)| name.contains(keyword.as_str()))
            .map(|(keyword, handler)| (keyword.as_str(), Arc::clone(handler)))
    }

    /// Registered keywords in resolution order
    pub fn keywords(&self) -> Vec<&str> {
        self.routes.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Iterate over `(keyword, handler)` pairs in resolution order
    pub fn routes(&self) -> impl Iterator<Item = (&str, &Arc<dyn Handler>)> {
        self.routes.iter().map(|(k, h)| (k.as_str(), h))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("keywords", &self.keywords())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteEntry;
    use crate::handlers::{EtlHandler, HandlerKind, StreamingHandler, ValidationHandler};

    fn label_of(handler: Option<Arc<dyn Handler>>) -> Option<String> {
        handler.map(|h| h.describe().label)
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("sales_etl_2025.csv").is_none());
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let mut registry = HandlerRegistry::new();
        registry.register("ETL", Arc::new(EtlHandler));

        assert_eq!(registry.keywords(), vec!["etl"]);
        assert_eq!(
            label_of(registry.resolve("sales_etl_2025.csv")),
            Some("ETL".to_string())
        );
        assert_eq!(
            label_of(registry.resolve("SALES_ETL_2025.CSV")),
            Some("ETL".to_string())
        );
    }

    #[test]
    fn test_first_registered_wins() {
        let mut registry = HandlerRegistry::new();
        registry.register("stream", Arc::new(StreamingHandler));
        registry.register("etl", Arc::new(EtlHandler));

        let (keyword, handler) = registry.resolve_entry("stream_etl.csv").unwrap();
        assert_eq!(keyword, "stream");
        assert_eq!(handler.describe().label, "Streaming");
    }

    #[test]
    fn test_reregister_overwrites_in_place() {
        let mut registry = HandlerRegistry::new();
        registry.register("etl", Arc::new(EtlHandler));
        registry.register("check", Arc::new(ValidationHandler));
        registry.register("ETL", Arc::new(StreamingHandler));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.keywords(), vec!["etl", "check"]);
        assert_eq!(
            label_of(registry.resolve("etl_check.csv")),
            Some("Streaming".to_string())
        );
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let mut registry = HandlerRegistry::new();
        registry.register("", Arc::new(EtlHandler));
        assert!(registry.resolve("anything.csv").is_some());
        assert!(registry.resolve("").is_some());
    }

    #[test]
    fn test_from_config_preserves_order() {
        let config = RouterConfig {
            routes: vec![
                RouteEntry::new("Analytics", HandlerKind::Analytics),
                RouteEntry::new("etl", HandlerKind::Etl),
            ],
            ..Default::default()
        };

        let registry = HandlerRegistry::from_config(&config);
        assert_eq!(registry.keywords(), vec!["analytics", "etl"]);
        assert_eq!(
            label_of(registry.resolve("etl_analytics.csv")),
            Some("Analytics".to_string())
        );
    }

    #[test]
    fn test_debug_lists_keywords() {
        let registry = HandlerRegistry::from_config(&RouterConfig::default());
        let debug = format!("{registry:?}");
        assert!(debug.contains("etl"));
        assert!(debug.contains("validation"));
    }
}
