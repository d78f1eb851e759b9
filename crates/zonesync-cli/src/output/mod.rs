//! Output formatting for different formats.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use zonesync::{format_summary, CheckOutcome, EvaluationResult};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary line for monitoring frameworks
    #[default]
    Plugin,
    /// JSON document with every slave's verdict
    Json,
}

/// JSON shape of a finished check.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    domain: &'a str,
    master: &'a str,
    summary: String,
    #[serde(flatten)]
    result: &'a EvaluationResult,
}

/// Render a finished check in the requested format.
pub fn render(outcome: &CheckOutcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Plugin => Ok(format_summary(&outcome.result)),
        OutputFormat::Json => {
            let report = JsonReport {
                domain: &outcome.snapshot.domain,
                master: &outcome.snapshot.master,
                summary: format_summary(&outcome.result),
                result: &outcome.result,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonesync::{evaluate, SerialNumber, ServerRecord, ToleranceConfig, ZoneSnapshot};

    fn outcome() -> CheckOutcome {
        let snapshot = ZoneSnapshot {
            domain: "example.com".to_string(),
            master: "ns1.example.com.".to_string(),
            master_serial: SerialNumber::new(100),
            slaves: vec![
                ServerRecord::resolved("ns2.example.com.", 100),
                ServerRecord::unresolved("ns3.example.com."),
            ],
        };
        let result = evaluate(snapshot.master_serial, &snapshot.slaves, &ToleranceConfig::default());
        CheckOutcome { snapshot, result }
    }

    #[test]
    fn plugin_output_is_one_line() {
        let line = render(&outcome(), OutputFormat::Plugin).unwrap();
        assert_eq!(
            line,
            "DNS CRITICAL, master serial: 100, fails: 1, failed Servers: ns3.example.com."
        );
    }

    #[test]
    fn json_output_carries_reports() {
        let json = render(&outcome(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["state"], "CRITICAL");
        assert_eq!(value["fail_count"], 1);
        assert_eq!(value["master_serial"], 100);
        assert_eq!(value["reports"].as_array().unwrap().len(), 2);
        assert_eq!(value["reports"][1]["classification"]["status"], "too_far_behind");
    }
}
