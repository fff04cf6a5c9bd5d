//! Structured logging system using tracing crate
//!
//! Logs go to stderr so they never interleave with the notices a dispatch run
//! prints on stdout.
//!
//! ## Environment Variables
//!
//! - `LOG_LEVEL`: Log level (ERROR, WARN, INFO, DEBUG, TRACE) - defaults to WARN
//! - `LOG_FORMAT`: Output format (json, pretty, compact) - defaults to compact
//! - `LOG_SPANS`: Include span events (true/false) - defaults to false
//! - `RUST_LOG`: Override log filtering (follows env_logger format)
//!
//! ## Examples
//!
//! ```bash
//! # Machine-readable logs next to JSON notices
//! LOG_FORMAT=json LOG_LEVEL=INFO job-router run --json --demo
//!
//! # See every routing decision
//! LOG_LEVEL=DEBUG job-router run sales_etl.csv
//! ```

use std::env;
use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for structured logging (machine-readable)
    Json,
    /// Pretty format with colors and indentation (human-readable)
    Pretty,
    /// Compact format with colors but minimal spacing (terminal-friendly)
    Compact,
}

impl LogFormat {
    /// Parse log format from string, falling back to compact
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Compact,
        }
    }
}

/// Parse a log level name, falling back to `default`
pub fn parse_level(s: &str, default: Level) -> Level {
    match s.trim().to_uppercase().as_str() {
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "INFO" => Level::INFO,
        "DEBUG" => Level::DEBUG,
        "TRACE" => Level::TRACE,
        _ => default,
    }
}

/// Raise `base` by one level per `-v` flag
pub fn apply_verbosity(base: Level, verbose: u8) -> Level {
    let ladder = [
        Level::ERROR,
        Level::WARN,
        Level::INFO,
        Level::DEBUG,
        Level::TRACE,
    ];
    let start = ladder.iter().position(|l| *l == base).unwrap_or(1);
    ladder[(start + verbose as usize).min(ladder.len() - 1)]
}

/// Initialize logging with manual configuration
pub fn init_logging(level: Level, format: LogFormat, include_spans: bool) {
    // Allow RUST_LOG to override
    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(level.to_string()),
    };

    let span_events = if include_spans {
        fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE
    } else {
        fmt::format::FmtSpan::NONE
    };

    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(span_events);
            subscriber.with(fmt_layer).init();
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_span_events(span_events);
            subscriber.with(fmt_layer).init();
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_ansi(true)
                .with_target(false)
                .with_writer(io::stderr)
                .with_span_events(span_events);
            subscriber.with(fmt_layer).init();
        }
    }
}

/// Initialize logging from environment variables and the CLI verbosity count
pub fn init_default_logging(verbose: u8) {
    let base = parse_level(
        &env::var("LOG_LEVEL").unwrap_or_else(|_| "WARN".to_string()),
        Level::WARN,
    );
    let level = apply_verbosity(base, verbose);

    let format = env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let log_format = LogFormat::parse(&format);

    let include_spans = env::var("LOG_SPANS")
        .unwrap_or_else(|_| "false".to_string())
        .to_lowercase()
        == "true";

    init_logging(level, log_format, include_spans);
}

/// Create a dispatch run span
#[macro_export]
macro_rules! dispatch_span {
    ($($field:tt)*) => {
        tracing::info_span!("dispatch_run", $($field)*)
    };
}

/// Create a span for routing a single item
#[macro_export]
macro_rules! route_span {
    ($($field:tt)*) => {
        tracing::debug_span!("route_item", $($field)*)
    };
}

// Re-export macros for convenience
pub use {dispatch_span, route_span};
