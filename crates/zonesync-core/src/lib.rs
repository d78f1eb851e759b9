//! Core types and decision logic for zonesync.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Types**: serials, server records, tolerance settings and health states
//! - **Evaluation**: slave classification, failure aggregation, threshold mapping
//! - **Formatting**: the one-line monitoring plugin summary
//! - **Errors**: [`CoreError`] and [`ConfigError`]
//!
//! # Example
//!
//! ```rust
//! use zonesync_core::{evaluate, format_summary, SerialNumber, ServerRecord, State, ToleranceConfig};
//!
//! let master = SerialNumber::new(100);
//! let slaves = vec![
//!     ServerRecord::resolved("ns2.example.com.", 100),
//!     ServerRecord::resolved("ns3.example.com.", 95),
//! ];
//!
//! let result = evaluate(master, &slaves, &ToleranceConfig::default());
//! assert_eq!(result.state, State::Critical);
//! assert_eq!(
//!     format_summary(&result),
//!     "DNS CRITICAL, master serial: 100, fails: 1, failed Servers: ns3.example.com."
//! );
//! ```

#![doc(html_root_url = "https://docs.rs/zonesync-core/0.3.0")]

mod error;
pub mod evaluate;
pub mod format;
pub mod types;

pub use error::{ConfigError, CoreError, Result};
pub use evaluate::{aggregate, classify, evaluate, resolve_state, Aggregate};
pub use format::{format_summary, format_unknown};
pub use types::*;
