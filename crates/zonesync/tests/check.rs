use async_trait::async_trait;
use std::collections::HashMap;
use zonesync::{
    check, format_summary, CoreError, DnsError, DnsResult, LookupConfig, ProbeRequest,
    SerialNumber, SoaAnswer, State, ToleranceConfig, ZoneResolver,
};

/// Name servers answering with fixed serials; anything else times out.
struct FixedZone {
    master: &'static str,
    serials: HashMap<&'static str, u32>,
    ns: Vec<&'static str>,
}

#[async_trait]
impl ZoneResolver for FixedZone {
    async fn soa(&self, domain: &str, server: Option<&str>) -> DnsResult<SoaAnswer> {
        let server = server.unwrap_or(self.master);
        self.serials
            .get(server)
            .map(|serial| SoaAnswer {
                master: self.master.to_string(),
                serial: SerialNumber::new(*serial),
            })
            .ok_or_else(|| DnsError::Timeout {
                record: "SOA",
                domain: domain.to_string(),
                server: server.to_string(),
                seconds: 5,
            })
    }

    async fn name_servers(&self, _domain: &str, _server: &str) -> DnsResult<Vec<String>> {
        Ok(self.ns.iter().map(ToString::to_string).collect())
    }
}

fn zone(slaves: &[(&'static str, u32)]) -> FixedZone {
    let mut serials: HashMap<_, _> = slaves.iter().copied().collect();
    serials.insert("ns1.example.org.", 100);

    let mut ns = vec!["ns1.example.org."];
    ns.extend(slaves.iter().map(|(name, _)| *name));

    FixedZone {
        master: "ns1.example.org.",
        serials,
        ns,
    }
}

async fn run(resolver: &FixedZone, tolerance: ToleranceConfig) -> zonesync::Result<String> {
    let outcome = check(
        resolver,
        LookupConfig::default(),
        &ProbeRequest::new("example.org"),
        &tolerance,
    )
    .await?;
    Ok(format_summary(&outcome.result))
}

#[tokio::test]
async fn in_sync_zone_is_ok() {
    let resolver = zone(&[("ns2.example.org.", 100), ("ns3.example.org.", 100)]);
    let line = run(&resolver, ToleranceConfig::default()).await.unwrap();
    assert_eq!(line, "DNS OK, master serial: 100, fails: 0");
}

#[tokio::test]
async fn lagging_slave_is_critical_without_thresholds() {
    let resolver = zone(&[("ns2.example.org.", 100), ("ns3.example.org.", 95)]);
    let line = run(&resolver, ToleranceConfig::default()).await.unwrap();
    assert_eq!(
        line,
        "DNS CRITICAL, master serial: 100, fails: 1, failed Servers: ns3.example.org."
    );
}

#[tokio::test]
async fn thresholds_and_tolerance_give_warning() {
    let resolver = zone(&[("ns2.example.org.", 95), ("ns3.example.org.", 80)]);
    let tolerance = ToleranceConfig::new(Some(0), Some(1), 10).unwrap();
    let line = run(&resolver, tolerance).await.unwrap();
    assert_eq!(
        line,
        "DNS WARN, master serial: 100, fails: 1, failed Servers: ns3.example.org."
    );
}

#[tokio::test]
async fn unreachable_slave_counts_as_failure() {
    let resolver = FixedZone {
        ns: vec!["ns1.example.org.", "ns2.example.org.", "ns4.example.org."],
        ..zone(&[("ns2.example.org.", 100)])
    };
    let tolerance = ToleranceConfig::new(None, None, 50).unwrap();

    let outcome = check(
        &resolver,
        LookupConfig::default(),
        &ProbeRequest::new("example.org"),
        &tolerance,
    )
    .await
    .unwrap();

    assert_eq!(outcome.result.state, State::Critical);
    assert_eq!(outcome.result.fail_count, 1);
    assert!(outcome.result.failed_servers[0].serial.is_unresolved());
}

#[tokio::test]
async fn unresolvable_master_is_a_resolution_error() {
    let resolver = FixedZone {
        master: "ns1.example.org.",
        serials: HashMap::new(),
        ns: Vec::new(),
    };

    let err = run(&resolver, ToleranceConfig::default()).await.unwrap_err();

    assert!(matches!(err, CoreError::Resolution(_)));
    assert!(!err.is_config_error());
}
