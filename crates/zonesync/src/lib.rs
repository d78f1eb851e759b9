//! Verify DNS zone replication by comparing SOA serials.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use zonesync::{check, HickoryZoneResolver, LookupConfig, ProbeRequest, ToleranceConfig};
//!
//! #[tokio::main]
//! async fn main() -> zonesync::Result<()> {
//!     let resolver = HickoryZoneResolver::new(LookupConfig::default());
//!     let tolerance = ToleranceConfig::new(Some(0), Some(1), 10)?;
//!
//!     let outcome = check(
//!         &resolver,
//!         LookupConfig::default(),
//!         &ProbeRequest::new("example.com"),
//!         &tolerance,
//!     )
//!     .await?;
//!
//!     println!("{}", zonesync::format_summary(&outcome.result));
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/zonesync/0.3.0")]

// Re-export core types
pub use zonesync_core::*;

// Re-export the DNS side
pub use zonesync_dns::{
    DnsError, DnsResult, HickoryZoneResolver, LookupConfig, Probe, ProbeRequest, RetryConfig,
    SoaAnswer, ZoneResolver, ZoneSnapshot,
};

// Re-export runtime for convenience
pub use tokio;

/// A resolved zone together with its verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// What DNS reported
    pub snapshot: ZoneSnapshot,
    /// What the evaluator made of it
    pub result: EvaluationResult,
}

/// Resolve a zone and evaluate it in one pass.
///
/// Resolution failures surface as [`CoreError::Resolution`]; individual
/// slave failures are part of the returned result.
pub async fn check<R: ZoneResolver + ?Sized>(
    resolver: &R,
    config: LookupConfig,
    request: &ProbeRequest,
    tolerance: &ToleranceConfig,
) -> Result<CheckOutcome> {
    let snapshot = Probe::new(resolver, config).resolve(request).await?;
    let result = evaluate(snapshot.master_serial, &snapshot.slaves, tolerance);

    Ok(CheckOutcome { snapshot, result })
}
