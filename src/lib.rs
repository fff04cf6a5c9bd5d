//! Job Router
//!
//! Keyword-based routing of named inputs, typically data file names, to
//! handler objects.
//!
//! # Overview
//!
//! - [`HandlerRegistry`] maps lower-cased keywords to handlers in registration
//!   order and resolves a name to the first keyword it contains.
//! - [`Handler`] is the single-capability interface; four builtin variants are
//!   selectable through [`HandlerKind`].
//! - [`Dispatcher`] routes a sequence of names in two passes: names containing
//!   the deferral marker (`"stream"` by default) are handled after all others.
//!
//! # Quick Start
//!
//! ```rust
//! use job_router::{Dispatcher, HandlerKind, HandlerRegistry, Notice};
//! use std::sync::Arc;
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register("etl", HandlerKind::Etl.build());
//! registry.register("streaming", HandlerKind::Streaming.build());
//!
//! let dispatcher = Dispatcher::new(Arc::new(registry));
//! let mut notices: Vec<Notice> = Vec::new();
//! let report = dispatcher.run(
//!     ["live_streaming.csv", "sales_etl.csv", "misc.csv"],
//!     &mut notices,
//! );
//!
//! assert_eq!(
//!     report.handling_order(),
//!     vec!["sales_etl.csv", "misc.csv", "live_streaming.csv"]
//! );
//! assert_eq!(report.unmatched(), vec!["misc.csv"]);
//! ```

pub mod config;
pub mod demo;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod notice;
pub mod observability;
pub mod registry;
pub mod testing;

pub use config::{ConfigError, RouteEntry, RouterConfig};
pub use dispatch::{DispatchMode, DispatchReport, Dispatcher, Outcome};
pub use error::{RouterError, RouterResult};
pub use handlers::{Handler, HandlerDescription, HandlerKind};
pub use notice::{ConsoleSink, Notice, NoticeSink, OutputFormat};
pub use registry::HandlerRegistry;
