//! Route table configuration
//!
//! The route table is the only configuration the router has: an ordered list of
//! `(keyword, handler)` pairs plus the marker that defers a name to the second
//! dispatch pass. Routes are a TOML array of tables so file order is
//! registration order.
//!
//! ```toml
//! [dispatch]
//! deferred_marker = "stream"
//!
//! [[routes]]
//! keyword = "etl"
//! handler = "etl"
//! ```

use crate::handlers::HandlerKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Main router configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterConfig {
    #[serde(default)]
    pub dispatch: DispatchSection,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// Dispatch section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchSection {
    /// Names containing this substring (case-insensitive) are handled in the deferred pass
    #[serde(default = "default_deferred_marker")]
    pub deferred_marker: String,
}

impl Default for DispatchSection {
    fn default() -> Self {
        Self {
            deferred_marker: default_deferred_marker(),
        }
    }
}

fn default_deferred_marker() -> String {
    "stream".to_string()
}

/// One keyword to handler association
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteEntry {
    pub keyword: String,
    pub handler: HandlerKind,
}

impl RouteEntry {
    pub fn new<S: Into<String>>(keyword: S, handler: HandlerKind) -> Self {
        Self {
            keyword: keyword.into(),
            handler,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Unknown handler kind: {0}")]
    UnknownHandler(String),
    #[error("Invalid route '{0}': expected KEYWORD=HANDLER")]
    InvalidRoute(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Default for RouterConfig {
    /// Route table with one keyword per builtin handler
    fn default() -> Self {
        Self {
            dispatch: DispatchSection::default(),
            routes: HandlerKind::ALL
                .iter()
                .map(|kind| RouteEntry::new(kind.as_str(), *kind))
                .collect(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatch.deferred_marker.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "dispatch.deferred_marker must not be empty".to_string(),
            ));
        }

        // An empty keyword is a substring of every name, so it shadows all later routes
        for (index, route) in self.routes.iter().enumerate() {
            if route.keyword.is_empty() {
                warn!(
                    position = index,
                    handler = %route.handler,
                    "Route with empty keyword matches every input"
                );
            }
        }

        Ok(())
    }
}

/// Parse a `KEYWORD=HANDLER` route given on the command line
pub fn parse_route_arg(arg: &str) -> Result<RouteEntry, ConfigError> {
    let (keyword, handler) = arg
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidRoute(arg.to_string()))?;

    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(ConfigError::InvalidRoute(arg.to_string()));
    }

    Ok(RouteEntry::new(keyword, handler.parse()?))
}
