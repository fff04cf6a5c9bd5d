//! Two-pass dispatch of input names
//!
//! Pass 1 classifies every name in input order. Names whose lower-cased form
//! contains the deferral marker are collected; every other name is routed
//! immediately. Pass 2 routes the collected names in their original relative
//! order. All immediate names are therefore handled before any deferred one.
//!
//! ```text
//! names → classify ─┬─ Immediate → handle_one
//!                   └─ Deferred  → queue ──(after pass 1)──→ handle_one
//! ```

use crate::config::RouterConfig;
use crate::handlers::Handler;
use crate::notice::{Notice, NoticeSink};
use crate::observability::metrics::{metrics, MetricsCollector};
use crate::registry::HandlerRegistry;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Which pass handles a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    Immediate,
    Deferred,
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::Immediate => f.write_str("immediate"),
            DispatchMode::Deferred => f.write_str("deferred"),
        }
    }
}

/// How one name was handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub name: String,
    pub mode: DispatchMode,
    /// Label of the handler that acted, `None` when no keyword matched
    pub handler: Option<String>,
}

/// Result of a dispatch run, outcomes in handling order
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub run_id: Uuid,
    pub outcomes: Vec<Outcome>,
}

impl DispatchReport {
    /// Outcomes that reached a handler
    pub fn handled(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.handler.is_some())
    }

    /// Names no keyword matched, in handling order
    pub fn unmatched(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.handler.is_none())
            .map(|o| o.name.as_str())
            .collect()
    }

    /// Names in the order they were handled
    pub fn handling_order(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Routes names through a shared registry
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<HandlerRegistry>,
    deferred_marker: String,
}

impl Dispatcher {
    /// Create a dispatcher deferring names that contain "stream"
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self {
            registry,
            deferred_marker: "stream".to_string(),
        }
    }

    /// Build registry and dispatcher from configuration
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(Arc::new(HandlerRegistry::from_config(config)))
            .with_deferred_marker(&config.dispatch.deferred_marker)
    }

    pub fn with_deferred_marker<S: AsRef<str>>(mut self, marker: S) -> Self {
        self.deferred_marker = marker.as_ref().to_lowercase();
        self
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn deferred_marker(&self) -> &str {
        &self.deferred_marker
    }

    /// Decide which pass handles `name`
    pub fn classify(&self, name: &str) -> DispatchMode {
        if name.to_lowercase().contains(&self.deferred_marker) {
            DispatchMode::Deferred
        } else {
            DispatchMode::Immediate
        }
    }

    /// Dispatch every name, recording counters in the global collector
    pub fn run<I, S>(&self, names: I, sink: &mut dyn NoticeSink) -> DispatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run_with_metrics(names, sink, metrics())
    }

    /// Dispatch every name, recording counters in `collector`
    pub fn run_with_metrics<I, S>(
        &self,
        names: I,
        sink: &mut dyn NoticeSink,
        collector: &MetricsCollector,
    ) -> DispatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let run_id = Uuid::new_v4();
        let span = crate::dispatch_span!(run_id = %run_id);
        let _enter = span.enter();

        collector.record_run();
        let mut outcomes = Vec::new();
        let mut deferred = Vec::new();

        for name in names {
            let name = name.as_ref();
            let mode = self.classify(name);
            collector.record_received(mode == DispatchMode::Deferred);
            sink.emit(Notice::NewItem {
                name: name.to_string(),
                mode,
            });

            match mode {
                DispatchMode::Immediate => {
                    outcomes.push(self.route(name, mode, sink, collector));
                }
                DispatchMode::Deferred => {
                    debug!(name, "Deferring item to second pass");
                    deferred.push(name.to_string());
                }
            }
        }

        for name in &deferred {
            outcomes.push(self.route(name, DispatchMode::Deferred, sink, collector));
        }

        let report = DispatchReport { run_id, outcomes };
        info!(
            items = report.len(),
            deferred = deferred.len(),
            unmatched = report.unmatched().len(),
            "Dispatch run complete"
        );
        report
    }

    /// Route a single name, returning the label of the handler that acted
    pub fn handle_one(&self, name: &str, sink: &mut dyn NoticeSink) -> Option<String> {
        self.route(name, self.classify(name), sink, metrics()).handler
    }

    fn route(
        &self,
        name: &str,
        mode: DispatchMode,
        sink: &mut dyn NoticeSink,
        collector: &MetricsCollector,
    ) -> Outcome {
        let span = crate::route_span!(name, mode = %mode);
        let _enter = span.enter();

        let handler = match self.registry.resolve_entry(name) {
            Some((keyword, handler)) => {
                debug!(keyword, "Keyword matched");
                handler.handle(name, sink);
                collector.record_handled();
                Some(handler.describe().label)
            }
            None => {
                debug!("No keyword matched");
                sink.emit(Notice::Unmatched {
                    name: name.to_string(),
                });
                collector.record_unmatched();
                None
            }
        };

        Outcome {
            name: name.to_string(),
            mode,
            handler,
        }
    }
}
