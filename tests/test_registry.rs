//! Registry resolution tests
//!
//! Resolution is a case-insensitive substring match over keywords in
//! registration order.

mod test_helpers;

use job_router::testing::RecordingHandler;
use job_router::{Handler, HandlerKind, HandlerRegistry, Notice};
use proptest::prelude::*;
use std::sync::Arc;
use test_helpers::recording_registry;

#[test]
fn test_registered_keyword_resolves_to_its_handler() {
    let (registry, handlers) = recording_registry(&["etl", "analytics"]);
    let mut sink: Vec<Notice> = Vec::new();

    let handler = registry.resolve("monthly_analytics_2025.csv").unwrap();
    handler.handle("monthly_analytics_2025.csv", &mut sink);

    assert_eq!(handlers[0].call_count(), 0);
    assert_eq!(handlers[1].calls(), vec!["monthly_analytics_2025.csv"]);
}

#[test]
fn test_uppercase_keyword_matches_lowercase_name() {
    let mut registry = HandlerRegistry::new();
    registry.register("ETL", HandlerKind::Etl.build());

    let handler = registry.resolve("sales_etl_2025.csv");
    assert_eq!(handler.unwrap().describe().label, "ETL");
}

#[test]
fn test_earlier_keyword_wins_over_later() {
    let (registry, _) = recording_registry(&["sales", "etl"]);
    let (keyword, handler) = registry.resolve_entry("sales_etl_2025.csv").unwrap();

    assert_eq!(keyword, "sales");
    assert_eq!(handler.describe().label, "SALES");
}

#[test]
fn test_reregistration_replaces_handler() {
    let mut registry = HandlerRegistry::new();
    let old = RecordingHandler::new("old");
    let new = RecordingHandler::new("new");
    registry.register("etl", Arc::new(old.clone()));
    registry.register("etl", Arc::new(new.clone()));

    let mut sink: Vec<Notice> = Vec::new();
    registry
        .resolve("sales_etl.csv")
        .unwrap()
        .handle("sales_etl.csv", &mut sink);

    assert_eq!(registry.len(), 1);
    assert_eq!(old.call_count(), 0);
    assert_eq!(new.call_count(), 1);
}

#[test]
fn test_unmatched_name_resolves_to_none() {
    let (registry, _) = recording_registry(&["etl", "streaming", "analytics", "validation"]);
    assert!(registry.resolve("unknown_file_2025.csv").is_none());
}

#[test]
fn test_routes_iterate_in_registration_order() {
    let (registry, _) = recording_registry(&["validation", "etl", "analytics"]);
    let keywords: Vec<&str> = registry.routes().map(|(k, _)| k).collect();
    assert_eq!(keywords, vec!["validation", "etl", "analytics"]);
}

proptest! {
    #[test]
    fn resolve_ignores_case(
        keyword in "[a-z]{1,6}",
        prefix in "[a-z0-9_]{0,6}",
        suffix in "[a-z0-9_.]{0,6}",
        upper_keyword in any::<bool>(),
        upper_name in any::<bool>(),
    ) {
        let mut registry = HandlerRegistry::new();
        let registered = if upper_keyword { keyword.to_uppercase() } else { keyword.clone() };
        registry.register(&registered, HandlerKind::Etl.build());

        let name = format!("{prefix}{keyword}{suffix}");
        let name = if upper_name { name.to_uppercase() } else { name };

        prop_assert!(registry.resolve(&name).is_some(), "{} should match {}", registered, name);
    }

    #[test]
    fn first_matching_keyword_wins(
        first in "[a-z]{1,4}",
        second in "[a-z]{1,4}",
        filler in "[0-9]{0,4}",
    ) {
        prop_assume!(first != second);
        let (registry, _) = recording_registry(&[first.as_str(), second.as_str()]);

        let name = format!("{second}{filler}{first}");
        let (keyword, _) = registry.resolve_entry(&name).unwrap();
        prop_assert_eq!(keyword, first.as_str());
    }
}
