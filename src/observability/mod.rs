//! Observability for job routing
//!
//! Structured logging through `tracing` and process-wide dispatch counters.

pub mod logging;
pub mod metrics;

// Re-export for convenience
pub use logging::{init_default_logging, init_logging, LogFormat};
pub use metrics::{metrics, MetricsCollector, MetricsSnapshot};

// Span macros for structured logging
pub use logging::{dispatch_span, route_span};
