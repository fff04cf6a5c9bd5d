//! Observable output of a dispatch run
//!
//! Every line the router prints is a [`Notice`]. Dispatch code never writes to
//! stdout directly; it hands notices to a [`NoticeSink`], which keeps the
//! routing logic testable and lets the CLI choose between text and JSON lines.

use crate::dispatch::DispatchMode;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use tracing::error;

/// One observable dispatch event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notice {
    /// A name was seen and classified
    NewItem { name: String, mode: DispatchMode },
    /// A handler acted on a name
    Handled {
        handler: String,
        action: String,
        name: String,
    },
    /// No registered keyword matched the name
    Unmatched { name: String },
}

impl Notice {
    /// Name the notice refers to
    pub fn name(&self) -> &str {
        match self {
            Notice::NewItem { name, .. }
            | Notice::Handled { name, .. }
            | Notice::Unmatched { name } => name,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NewItem { name, mode } => write!(f, "Dispatcher ({mode}): New item -> {name}"),
            Notice::Handled {
                handler,
                action,
                name,
            } => write!(f, "{handler}: {action} {name}"),
            Notice::Unmatched { name } => write!(f, "No handler matched for {name}"),
        }
    }
}

/// Destination for notices
pub trait NoticeSink {
    fn emit(&mut self, notice: Notice);
}

impl NoticeSink for Vec<Notice> {
    fn emit(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Line format used by [`ConsoleSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text, one notice per line
    Text,
    /// One JSON object per line
    Json,
}

/// Writes notices to a byte stream, stdout by default
///
/// Write failures are logged and swallowed so that a closed pipe cannot
/// interrupt a dispatch run halfway through.
pub struct ConsoleSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_notice(&mut self, notice: &Notice) -> crate::RouterResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{notice}")?,
            OutputFormat::Json => {
                let line = serde_json::to_string(notice)?;
                writeln!(self.writer, "{line}")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> NoticeSink for ConsoleSink<W> {
    fn emit(&mut self, notice: Notice) {
        if let Err(e) = self.write_notice(&notice) {
            error!(name = notice.name(), "Failed to write notice: {}", e);
        }
    }
}
