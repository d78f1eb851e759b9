//! # zonesync-cli
//!
//! Monitoring plugin front end for zonesync.
//!
//! ## Features
//!
//! - **Plugin contract**: one summary line, exit codes 0/1/2/3
//! - **Discovery**: master, serial and slaves from DNS when not given
//! - **Thresholds**: warning/critical on the number of failed slaves
//! - **JSON output**: full per-slave report with `--output json`
//! - **Config file**: lookup defaults from a TOML file named with `--config`

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::run;
