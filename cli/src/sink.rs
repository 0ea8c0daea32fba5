//! Terminal rendering of operation results.

use std::io::Write;

use posts_core::PresentationSink;
use serde_json::Value;

/// Writes the status line to stderr and results as pretty JSON to stdout,
/// so `posts list > posts.json` captures only the data.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl PresentationSink for TerminalSink {
    fn set_status(&self, message: &str, success: bool) {
        let _ = writeln!(std::io::stderr(), "{}", status_line(message, success));
    }

    fn set_result(&self, data: &Value) {
        let rendered = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        let _ = writeln!(std::io::stdout(), "{rendered}");
    }
}

fn status_line(message: &str, success: bool) -> String {
    let marker = if success { "ok" } else { "error" };
    format!("[{marker}] {message}")
}
