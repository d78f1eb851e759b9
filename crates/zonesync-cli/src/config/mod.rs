//! Configuration management.
//!
//! Settings come from the command line, optionally backed by a TOML file
//! named with `--config`. Flags always win over file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use zonesync::{ConfigError, LookupConfig, ProbeRequest, RetryConfig, ToleranceConfig};

use crate::cli::args::Cli;
use crate::output::OutputFormat;

/// Lookup defaults read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Per-lookup timeout in seconds.
    pub timeout: Option<u64>,

    /// Retries for a failed slave lookup.
    pub retries: Option<u32>,

    /// Name server port.
    pub port: Option<u16>,

    /// Query slaves concurrently.
    #[serde(default)]
    pub parallel: bool,

    /// Default output format.
    pub output: Option<OutputFormat>,
}

impl FileConfig {
    /// Load configuration from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        Ok(config)
    }
}

/// Everything needed for one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// What to check
    pub request: ProbeRequest,
    /// Thresholds and serial tolerance
    pub tolerance: ToleranceConfig,
    /// How to query
    pub lookup: LookupConfig,
    /// How to print the verdict
    pub output: OutputFormat,
    /// `-v` count
    pub verbosity: u8,
}

impl Settings {
    /// Validate the command line and merge in the config file, if any.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(cli, &file)?)
    }

    /// Combine flags with file values. Performs no I/O.
    pub fn merge(cli: &Cli, file: &FileConfig) -> Result<Self, zonesync::CoreError> {
        let domain = cli.domain.trim();
        if domain.is_empty() {
            return Err(ConfigError::Missing("-d DOMAIN").into());
        }

        let tolerance = ToleranceConfig::new(cli.warning, cli.critical, cli.tolerance)?;

        let mut request = ProbeRequest::new(domain);
        request.master = cli.master.clone();
        request.master_serial = cli.serial;
        request.slaves = cli.slave_list();

        if request.slaves.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigError::InvalidValue {
                option: "-S".to_string(),
                reason: "no slave servers given".to_string(),
            }
            .into());
        }

        let timeout = cli.timeout.or(file.timeout);
        if timeout == Some(0) {
            return Err(ConfigError::InvalidValue {
                option: "--timeout".to_string(),
                reason: "must be at least 1 second".to_string(),
            }
            .into());
        }

        let mut lookup = LookupConfig::default()
            .parallel(cli.parallel || file.parallel)
            .retry(RetryConfig::new().max_retries(cli.retries.or(file.retries).unwrap_or(0)));
        if let Some(secs) = timeout {
            lookup = lookup.timeout(Duration::from_secs(secs));
        }
        if let Some(port) = cli.port.or(file.port) {
            lookup = lookup.port(port);
        }

        Ok(Self {
            request,
            tolerance,
            lookup,
            output: cli.output.or(file.output).unwrap_or_default(),
            verbosity: cli.verbose,
        })
    }
}
