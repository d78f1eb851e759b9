//! SOA and NS lookups over `hickory-resolver`.

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::TokioResolver;
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, trace};
use zonesync_core::SerialNumber;

use crate::config::LookupConfig;
use crate::error::{DnsError, DnsResult};

/// Label used in errors for lookups through the local resolver
const SYSTEM: &str = "system";

/// Interesting part of an SOA answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaAnswer {
    /// Primary master name server (SOA MNAME)
    pub master: String,
    /// Zone serial
    pub serial: SerialNumber,
}

/// Source of SOA serials and name server lists.
#[async_trait]
pub trait ZoneResolver: Send + Sync {
    /// SOA record for `domain`.
    ///
    /// With `server` set, the query goes straight to that name server
    /// without asking for recursion. Without it, the local resolver is used.
    async fn soa(&self, domain: &str, server: Option<&str>) -> DnsResult<SoaAnswer>;

    /// NS records for `domain` as published by `server`.
    async fn name_servers(&self, domain: &str, server: &str) -> DnsResult<Vec<String>>;
}

/// [`ZoneResolver`] backed by hickory's tokio resolver
#[derive(Debug, Clone, Default)]
pub struct HickoryZoneResolver {
    config: LookupConfig,
}

impl HickoryZoneResolver {
    /// Create a resolver with the given lookup settings
    #[must_use]
    pub const fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    /// Resolver using the system configuration (recursive).
    fn system_resolver(&self) -> DnsResult<TokioResolver> {
        let mut builder = TokioResolver::builder_tokio()
            .map_err(|e| DnsError::Setup(format!("failed to read system configuration: {e}")))?;

        let opts = builder.options_mut();
        opts.timeout = self.config.timeout;
        opts.attempts = 1;

        Ok(builder.build())
    }

    /// Resolver that only talks to `addr` and asks for no recursion.
    fn direct_resolver(&self, addr: IpAddr) -> TokioResolver {
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(
            SocketAddr::new(addr, self.config.port),
            Protocol::Udp,
        ));

        let mut builder =
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default());

        let opts = builder.options_mut();
        opts.timeout = self.config.timeout;
        opts.attempts = 1;
        opts.recursion_desired = false;
        opts.cache_size = 0;

        builder.build()
    }

    /// Turn a name server host name or IP literal into an address.
    async fn server_address(&self, server: &str) -> DnsResult<IpAddr> {
        if let Ok(ip) = server.parse::<IpAddr>() {
            return Ok(ip);
        }

        let resolver = self.system_resolver()?;
        let lookup = self
            .with_timeout("A/AAAA", server, SYSTEM, resolver.lookup_ip(server))
            .await?
            .map_err(|e| DnsError::ServerAddress {
                server: server.to_string(),
                reason: e.to_string(),
            })?;

        let addr = lookup.iter().next().ok_or_else(|| DnsError::ServerAddress {
            server: server.to_string(),
            reason: "no addresses".to_string(),
        })?;

        trace!(server, %addr, "resolved name server address");
        Ok(addr)
    }

    /// Resolver for an optional target server.
    async fn resolver_for(&self, server: Option<&str>) -> DnsResult<TokioResolver> {
        match server {
            Some(server) => Ok(self.direct_resolver(self.server_address(server).await?)),
            None => self.system_resolver(),
        }
    }

    /// Bound a lookup future by the configured timeout.
    async fn with_timeout<F: Future>(
        &self,
        record: &'static str,
        domain: &str,
        server: &str,
        fut: F,
    ) -> DnsResult<F::Output> {
        tokio::time::timeout(self.config.timeout, fut)
            .await
            .map_err(|_| DnsError::Timeout {
                record,
                domain: domain.to_string(),
                server: server.to_string(),
                seconds: self.config.timeout.as_secs(),
            })
    }
}

#[async_trait]
impl ZoneResolver for HickoryZoneResolver {
    async fn soa(&self, domain: &str, server: Option<&str>) -> DnsResult<SoaAnswer> {
        let label = server.unwrap_or(SYSTEM);
        debug!(domain, server = label, "querying SOA");

        let resolver = self.resolver_for(server).await?;
        let lookup = self
            .with_timeout("SOA", domain, label, resolver.soa_lookup(domain))
            .await?
            .map_err(|e| DnsError::Lookup {
                record: "SOA",
                domain: domain.to_string(),
                server: label.to_string(),
                reason: e.to_string(),
            })?;

        let soa = lookup.iter().next().ok_or_else(|| DnsError::NoRecords {
            record: "SOA",
            domain: domain.to_string(),
            server: label.to_string(),
        })?;

        let answer = SoaAnswer {
            master: soa.mname().to_string(),
            serial: SerialNumber::new(soa.serial()),
        };

        debug!(
            domain,
            server = label,
            master = %answer.master,
            serial = %answer.serial,
            "SOA answer"
        );

        Ok(answer)
    }

    async fn name_servers(&self, domain: &str, server: &str) -> DnsResult<Vec<String>> {
        debug!(domain, server, "querying NS");

        let resolver = self.resolver_for(Some(server)).await?;
        let lookup = self
            .with_timeout("NS", domain, server, resolver.ns_lookup(domain))
            .await?
            .map_err(|e| DnsError::Lookup {
                record: "NS",
                domain: domain.to_string(),
                server: server.to_string(),
                reason: e.to_string(),
            })?;

        let names: Vec<String> = lookup.iter().map(ToString::to_string).collect();
        debug!(domain, server, count = names.len(), "NS answer");

        Ok(names)
    }
}
