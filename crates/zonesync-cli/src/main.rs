//! check_zone_sync - DNS slave serial monitoring plugin
//!
//! Compares the SOA serial of every slave with the zone master and exits
//! with the monitoring plugin state.

#[tokio::main]
async fn main() {
    let code = zonesync_cli::run().await;
    std::process::exit(code);
}
