//! Handler interface and builtin handler kinds
//!
//! A handler is a stateless unit that performs a nominal action for a matched
//! input name. The registry and dispatcher only see `Arc<dyn Handler>`, so new
//! handler types can be registered without touching either of them.

use crate::config::ConfigError;
use crate::notice::{Notice, NoticeSink};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

pub mod builtin;

pub use builtin::{AnalyticsHandler, EtlHandler, StreamingHandler, ValidationHandler};

/// Handler interface
pub trait Handler: Send + Sync {
    /// Label and action verb reported for every handled name
    fn describe(&self) -> HandlerDescription;

    /// Act on `name`, emitting exactly one `Handled` notice
    fn handle(&self, name: &str, sink: &mut dyn NoticeSink) {
        let HandlerDescription { label, action } = self.describe();
        debug!(handler = %label, name, "Handling item");
        sink.emit(Notice::Handled {
            handler: label,
            action,
            name: name.to_string(),
        });
    }
}

/// What a handler reports about itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDescription {
    pub label: String,
    pub action: String,
}

impl HandlerDescription {
    pub fn new<L: Into<String>, A: Into<String>>(label: L, action: A) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

/// Builtin handler variants selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    Etl,
    Streaming,
    Analytics,
    Validation,
}

impl HandlerKind {
    pub const ALL: [HandlerKind; 4] = [
        HandlerKind::Etl,
        HandlerKind::Streaming,
        HandlerKind::Analytics,
        HandlerKind::Validation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerKind::Etl => "etl",
            HandlerKind::Streaming => "streaming",
            HandlerKind::Analytics => "analytics",
            HandlerKind::Validation => "validation",
        }
    }

    /// Create a shared instance of the builtin handler
    pub fn build(&self) -> Arc<dyn Handler> {
        match self {
            HandlerKind::Etl => Arc::new(EtlHandler),
            HandlerKind::Streaming => Arc::new(StreamingHandler),
            HandlerKind::Analytics => Arc::new(AnalyticsHandler),
            HandlerKind::Validation => Arc::new(ValidationHandler),
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandlerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "etl" => Ok(HandlerKind::Etl),
            "streaming" => Ok(HandlerKind::Streaming),
            "analytics" => Ok(HandlerKind::Analytics),
            "validation" => Ok(HandlerKind::Validation),
            other => Err(ConfigError::UnknownHandler(other.to_string())),
        }
    }
}
