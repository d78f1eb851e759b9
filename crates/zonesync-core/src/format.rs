//! Summary line formatting.

use crate::types::{EvaluationResult, State};

/// Render the monitoring plugin summary line.
///
/// `DNS <LEVEL>, master serial: <serial>, fails: <n>[, failed Servers: <a b c>]`
#[must_use]
pub fn format_summary(result: &EvaluationResult) -> String {
    let mut line = format!(
        "DNS {}, master serial: {}, fails: {}",
        result.state, result.master_serial, result.fail_count
    );

    if result.fail_count > 0 {
        let servers = result.failed_addresses().collect::<Vec<_>>().join(" ");
        line.push_str(&format!(", failed Servers: {servers}"));
    }

    line
}

/// Render the line for a check that could not be carried out.
#[must_use]
pub fn format_unknown(message: impl std::fmt::Display) -> String {
    format!("DNS {}, {message}", State::Unknown)
}
