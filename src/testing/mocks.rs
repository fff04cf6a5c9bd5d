//! Mock handler implementations for testing

use crate::handlers::{Handler, HandlerDescription};
use crate::notice::NoticeSink;
use std::sync::{Arc, Mutex};

/// Handler that records every name it handles
#[derive(Debug, Clone)]
pub struct RecordingHandler {
    label: String,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingHandler {
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Names handled so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl Handler for RecordingHandler {
    fn describe(&self) -> HandlerDescription {
        HandlerDescription::new(self.label.clone(), "Recording")
    }

    fn handle(&self, name: &str, sink: &mut dyn NoticeSink) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(name.to_string());
        sink.emit(crate::notice::Notice::Handled {
            handler: self.label.clone(),
            action: "Recording".to_string(),
            name: name.to_string(),
        });
    }
}

/// Handler that records into a log shared with other handlers
///
/// Lets a test observe the interleaving of calls across several handlers.
#[derive(Debug, Clone)]
pub struct SharedLogHandler {
    label: String,
    log: Arc<Mutex<Vec<(String, String)>>>,
}

impl SharedLogHandler {
    pub fn new<S: Into<String>>(label: S, log: Arc<Mutex<Vec<(String, String)>>>) -> Self {
        Self {
            label: label.into(),
            log,
        }
    }
}

impl Handler for SharedLogHandler {
    fn describe(&self) -> HandlerDescription {
        HandlerDescription::new(self.label.clone(), "Logging")
    }

    fn handle(&self, name: &str, _sink: &mut dyn NoticeSink) {
        self.log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((self.label.clone(), name.to_string()));
    }
}
