//! Demonstration input
//!
//! One file per builtin handler plus one that nothing matches. The streaming
//! file is deferred, so it is handled last.

use crate::config::RouterConfig;
use crate::dispatch::{DispatchReport, Dispatcher};
use crate::notice::NoticeSink;

pub const DEMO_FILES: [&str; 5] = [
    "sales_etl_2025.csv",
    "clickstream_streaming_2025.csv",
    "monthly_analytics_2025.csv",
    "user_validation_2025.csv",
    "unknown_file_2025.csv",
];

/// Dispatch [`DEMO_FILES`] through the default route table
pub fn run_demo(sink: &mut dyn NoticeSink) -> DispatchReport {
    Dispatcher::from_config(&RouterConfig::default()).run(DEMO_FILES, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Notice;

    #[test]
    fn test_demo_output() {
        let mut sink: Vec<Notice> = Vec::new();
        let report = run_demo(&mut sink);

        let lines: Vec<String> = sink.iter().map(|n| n.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Dispatcher (immediate): New item -> sales_etl_2025.csv",
                "ETL: Processing sales_etl_2025.csv",
                "Dispatcher (deferred): New item -> clickstream_streaming_2025.csv",
                "Dispatcher (immediate): New item -> monthly_analytics_2025.csv",
                "Analytics: Analyzing monthly_analytics_2025.csv",
                "Dispatcher (immediate): New item -> user_validation_2025.csv",
                "Validation: Validating user_validation_2025.csv",
                "Dispatcher (immediate): New item -> unknown_file_2025.csv",
                "No handler matched for unknown_file_2025.csv",
                "Streaming: Streaming clickstream_streaming_2025.csv",
            ]
        );
        assert_eq!(report.unmatched(), vec!["unknown_file_2025.csv"]);
    }
}
