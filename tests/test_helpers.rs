//! Test helpers and utilities for integration tests

use job_router::testing::RecordingHandler;
use job_router::{Dispatcher, HandlerRegistry, RouterConfig};
use std::sync::Arc;

/// Dispatcher over the built-in route table
#[allow(dead_code)]
pub fn default_dispatcher() -> Dispatcher {
    Dispatcher::from_config(&RouterConfig::default())
}

/// Registry with one recording handler per keyword, in the given order
#[allow(dead_code)]
pub fn recording_registry(keywords: &[&str]) -> (HandlerRegistry, Vec<RecordingHandler>) {
    let mut registry = HandlerRegistry::new();
    let mut handlers = Vec::new();

    for keyword in keywords {
        let handler = RecordingHandler::new(keyword.to_uppercase());
        registry.register(keyword, Arc::new(handler.clone()));
        handlers.push(handler);
    }

    (registry, handlers)
}
