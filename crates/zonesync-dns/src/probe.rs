//! Gather everything the evaluator needs for one zone.
//!
//! Master, master serial and slave list may each be supplied up front or
//! discovered through DNS. Failing to determine any of them aborts the
//! check. Slave serial lookups never abort: a failed lookup is recorded as
//! [`SerialObservation::Unresolved`].

use futures_util::future::join_all;
use tracing::{debug, info};
use zonesync_core::{SerialNumber, SerialObservation, ServerRecord};

use crate::config::LookupConfig;
use crate::error::{DnsError, DnsResult};
use crate::resolver::ZoneResolver;

/// What the caller already knows about the zone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeRequest {
    /// Zone to check
    pub domain: String,

    /// Master name server; discovered from the zone SOA when absent
    pub master: Option<String>,

    /// Slaves in check order; discovered from the master's NS set when absent
    pub slaves: Option<Vec<String>>,

    /// Reference serial; asked from the master when absent
    pub master_serial: Option<SerialNumber>,
}

impl ProbeRequest {
    /// Request for `domain` with nothing known yet
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Use this master instead of the SOA MNAME
    #[must_use]
    pub fn master(mut self, master: impl Into<String>) -> Self {
        self.master = Some(master.into());
        self
    }

    /// Check exactly these slaves, in this order
    #[must_use]
    pub fn slaves<I, S>(mut self, slaves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slaves = Some(slaves.into_iter().map(Into::into).collect());
        self
    }

    /// Compare against this serial instead of asking the master
    #[must_use]
    pub const fn master_serial(mut self, serial: SerialNumber) -> Self {
        self.master_serial = Some(serial);
        self
    }
}

/// Resolved view of a zone, ready for evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSnapshot {
    /// Zone checked
    pub domain: String,
    /// Master name server
    pub master: String,
    /// Reference serial
    pub master_serial: SerialNumber,
    /// Slaves with their serials, in check order
    pub slaves: Vec<ServerRecord>,
}

/// Drives a [`ZoneResolver`] through one check
pub struct Probe<'a, R: ZoneResolver + ?Sized> {
    resolver: &'a R,
    config: LookupConfig,
}

impl<'a, R: ZoneResolver + ?Sized> Probe<'a, R> {
    /// Create a probe over `resolver`
    pub const fn new(resolver: &'a R, config: LookupConfig) -> Self {
        Self { resolver, config }
    }

    /// Determine master, serial and slaves, then collect slave serials.
    pub async fn resolve(&self, request: &ProbeRequest) -> DnsResult<ZoneSnapshot> {
        let domain = request.domain.as_str();

        let master = match &request.master {
            Some(master) => master.clone(),
            None => {
                let soa = self.resolver.soa(domain, None).await?;
                info!(domain, master = %soa.master, "master taken from SOA");
                soa.master
            }
        };

        let master_serial = match request.master_serial {
            Some(serial) => serial,
            None => {
                let soa = self.resolver.soa(domain, Some(&master)).await?;
                info!(domain, master = %master, serial = %soa.serial, "master serial");
                soa.serial
            }
        };

        let slave_names = match &request.slaves {
            Some(slaves) => slaves.clone(),
            None => self.discover_slaves(domain, &master).await?,
        };

        let slaves = if self.config.parallel {
            join_all(
                slave_names
                    .iter()
                    .map(|name| self.slave_record(domain, name)),
            )
            .await
        } else {
            let mut records = Vec::with_capacity(slave_names.len());
            for name in &slave_names {
                records.push(self.slave_record(domain, name).await);
            }
            records
        };

        Ok(ZoneSnapshot {
            domain: domain.to_string(),
            master,
            master_serial,
            slaves,
        })
    }

    /// NS set published by the master, without the master itself.
    async fn discover_slaves(&self, domain: &str, master: &str) -> DnsResult<Vec<String>> {
        let names = self.resolver.name_servers(domain, master).await?;

        let slaves: Vec<String> = names
            .into_iter()
            .filter(|name| !same_host(name, master))
            .collect();

        if slaves.is_empty() {
            return Err(DnsError::NoSlaves(domain.to_string()));
        }

        info!(domain, count = slaves.len(), "slaves taken from NS set");
        Ok(slaves)
    }

    /// Ask one slave for its serial, retrying transient failures.
    async fn slave_record(&self, domain: &str, slave: &str) -> ServerRecord {
        let retry = self.config.retry;
        let mut attempt = 0;

        loop {
            match self.resolver.soa(domain, Some(slave)).await {
                Ok(soa) => {
                    info!(slave, serial = %soa.serial, "slave serial");
                    return ServerRecord::resolved(slave, soa.serial.get());
                }
                Err(e) if e.is_transient() && attempt < retry.max_retries => {
                    let delay = retry.backoff_for(attempt);
                    debug!(slave, error = %e, attempt, ?delay, "retrying slave lookup");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    debug!(slave, error = %e, "slave lookup failed");
                    return ServerRecord::new(slave, SerialObservation::Unresolved);
                }
            }
        }
    }
}

/// Compare host names ignoring case and the trailing root dot.
fn same_host(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}
