//! DNS lookups for zonesync.
//!
//! This crate is the network side of a check: it finds the zone master,
//! the master's serial and the slave list, then asks every slave for its
//! serial. The answers are handed to [`zonesync_core::evaluate`].
//!
//! The [`ZoneResolver`] trait is the seam between lookups and the probe
//! logic; [`HickoryZoneResolver`] is the production implementation.

#![doc(html_root_url = "https://docs.rs/zonesync-dns/0.3.0")]

pub mod config;
mod error;
pub mod probe;
pub mod resolver;

pub use config::{LookupConfig, RetryConfig};
pub use error::{DnsError, DnsResult};
pub use probe::{Probe, ProbeRequest, ZoneSnapshot};
pub use resolver::{HickoryZoneResolver, SoaAnswer, ZoneResolver};
