//! Command-line argument definitions using clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use zonesync::SerialNumber;

use crate::output::OutputFormat;

/// Check that the slave name servers of a zone carry the master's SOA serial
///
/// Exit codes: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.
#[derive(Parser, Debug, Clone)]
#[command(name = "check_zone_sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Zone to check
    #[arg(short = 'd', long)]
    pub domain: String,

    /// Master name server (default: MNAME of the zone SOA)
    #[arg(short = 'H', long = "master", value_name = "MASTER")]
    pub master: Option<String>,

    /// Slave name servers, space separated (default: NS set of the master)
    #[arg(short = 'S', long = "slaves", value_name = "SLAVES", action = ArgAction::Append)]
    pub slaves: Vec<String>,

    /// Master serial to compare against (default: asked from the master)
    #[arg(short = 's', long = "serial", value_name = "SERIAL")]
    pub serial: Option<SerialNumber>,

    /// Warn when more than FAILS slaves are out of sync
    #[arg(short = 'w', long = "warning", value_name = "FAILS")]
    pub warning: Option<u32>,

    /// Go critical when more than FAILS slaves are out of sync
    #[arg(short = 'c', long = "critical", value_name = "FAILS")]
    pub critical: Option<u32>,

    /// Serial lag a slave may have before it counts as failed (0 = exact match)
    #[arg(short = 't', long = "tolerance", value_name = "TOLERANCE", default_value_t = 0)]
    pub tolerance: u32,

    /// Increase verbosity (-v progress, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Per-lookup timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Retries for a failed slave lookup
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Port to query on every name server
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Query slaves concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// TOML file with lookup defaults
    #[arg(long, value_name = "PATH", env = "ZONESYNC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Slaves given on the command line, split on whitespace.
    ///
    /// `None` when `-S` was not used at all.
    #[must_use]
    pub fn slave_list(&self) -> Option<Vec<String>> {
        if self.slaves.is_empty() {
            return None;
        }

        Some(
            self.slaves
                .iter()
                .flat_map(|s| s.split_whitespace())
                .map(str::to_string)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("check_zone_sync").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn domain_is_required() {
        assert!(Cli::try_parse_from(["check_zone_sync"]).is_err());
    }

    #[test]
    fn slave_list_is_split_and_ordered() {
        let cli = parse(&["-d", "example.com", "-S", "ns3.example.com  ns2.example.com", "-S", "192.0.2.1"]);
        assert_eq!(
            cli.slave_list().unwrap(),
            ["ns3.example.com", "ns2.example.com", "192.0.2.1"]
        );
    }

    #[test]
    fn no_slave_flag_means_discovery() {
        let cli = parse(&["-d", "example.com"]);
        assert_eq!(cli.slave_list(), None);
    }

    #[test]
    fn output_format_names() {
        assert_eq!(parse(&["-d", "example.com", "-o", "json"]).output, Some(OutputFormat::Json));
        assert_eq!(parse(&["-d", "example.com", "-o", "plugin"]).output, Some(OutputFormat::Plugin));
        assert!(Cli::try_parse_from(["check_zone_sync", "-d", "example.com", "-o", "yaml"]).is_err());
    }

    #[test]
    fn verbosity_is_counted() {
        assert_eq!(parse(&["-d", "example.com", "-vv"]).verbose, 2);
        assert_eq!(parse(&["-d", "example.com", "-v", "-v", "-v"]).verbose, 3);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        assert!(Cli::try_parse_from(["check_zone_sync", "-d", "example.com", "-w", "-1"]).is_err());
    }

    #[test]
    fn serial_is_parsed() {
        let cli = parse(&["-d", "example.com", "-s", "2024010101"]);
        assert_eq!(cli.serial, Some(SerialNumber::new(2_024_010_101)));
    }
}
