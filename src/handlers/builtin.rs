//! Builtin handlers
//!
//! Each one differs only in the label and action it reports.

use super::{Handler, HandlerDescription};

/// Batch extract-transform-load
#[derive(Debug, Default, Clone, Copy)]
pub struct EtlHandler;

impl Handler for EtlHandler {
    fn describe(&self) -> HandlerDescription {
        HandlerDescription::new("ETL", "Processing")
    }
}

/// Incremental consumption of streamed data
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamingHandler;

impl Handler for StreamingHandler {
    fn describe(&self) -> HandlerDescription {
        HandlerDescription::new("Streaming", "Streaming")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsHandler;

impl Handler for AnalyticsHandler {
    fn describe(&self) -> HandlerDescription {
        HandlerDescription::new("Analytics", "Analyzing")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ValidationHandler;

impl Handler for ValidationHandler {
    fn describe(&self) -> HandlerDescription {
        HandlerDescription::new("Validation", "Validating")
    }
}
