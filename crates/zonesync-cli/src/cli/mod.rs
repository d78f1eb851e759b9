//! CLI argument parsing and check dispatch.

pub mod args;

use anyhow::Result;
use args::Cli;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info};
use zonesync::{
    check, format_unknown, CheckOutcome, HickoryZoneResolver, State, ZoneResolver, STATE_UNKNOWN,
};

use crate::config::Settings;
use crate::logging;
use crate::output;

/// What a finished run prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Text for standard output
    pub stdout: String,
    /// Process exit code
    pub exit_code: i32,
}

/// Run the plugin and return its exit code.
pub async fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help, version and usage errors all leave the check unperformed.
            let _ = e.print();
            if !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                eprintln!("{}", format_unknown("invalid arguments"));
            }
            return STATE_UNKNOWN;
        }
    };

    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => return fail(&e),
    };

    logging::init(settings.verbosity);

    let resolver = HickoryZoneResolver::new(settings.lookup);
    match execute(&settings, &resolver).await {
        Ok(verdict) => {
            println!("{}", verdict.stdout);
            verdict.exit_code
        }
        Err(e) => fail(&e),
    }
}

/// Resolve and evaluate the zone described by `settings`.
pub async fn execute<R: ZoneResolver + ?Sized>(settings: &Settings, resolver: &R) -> Result<Verdict> {
    info!(domain = %settings.request.domain, "checking zone");

    let outcome: CheckOutcome = check(
        resolver,
        settings.lookup,
        &settings.request,
        &settings.tolerance,
    )
    .await?;

    for report in &outcome.result.reports {
        debug!(
            slave = %report.server.address,
            serial = %report.server.serial,
            status = ?report.classification.status,
            delta = ?report.classification.delta,
            "classified slave"
        );
    }

    let state: State = outcome.result.state;
    info!(%state, fails = outcome.result.fail_count, "check finished");

    Ok(Verdict {
        stdout: output::render(&outcome, settings.output)?,
        exit_code: state.exit_code(),
    })
}

/// Report a fatal error and return the UNKNOWN exit code.
fn fail(err: &anyhow::Error) -> i32 {
    eprintln!("{}", format_unknown(format!("{err:#}")));
    STATE_UNKNOWN
}
