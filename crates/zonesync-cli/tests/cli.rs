//! Offline command-line behaviour: everything here fails or exits before
//! any DNS query is sent.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn plugin() -> Command {
    let mut cmd = Command::cargo_bin("check_zone_sync").unwrap();
    cmd.env_remove("ZONESYNC_CONFIG");
    cmd
}

#[test]
fn help_exits_unknown() {
    plugin()
        .arg("-h")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--domain"));
}

#[test]
fn missing_domain_exits_unknown() {
    plugin()
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("DNS UNKNOWN"));
}

#[test]
fn warn_above_crit_exits_unknown() {
    plugin()
        .args(["-d", "example.com", "-w", "5", "-c", "3"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(
            "DNS UNKNOWN, configuration error: warning threshold (5) must not exceed critical threshold (3)\n",
        );
}

#[test]
fn negative_tolerance_exits_unknown() {
    plugin()
        .args(["-d", "example.com", "-t", "-4"])
        .assert()
        .code(3);
}

#[test]
fn missing_config_file_exits_unknown() {
    plugin()
        .args(["-d", "example.com", "--config", "/nonexistent/zonesync.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cannot read config file"));
}

#[test]
fn invalid_config_file_exits_unknown() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "retries = \"many\"").unwrap();

    plugin()
        .args(["-d", "example.com", "--config"])
        .arg(file.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config file"));
}
