//! Serial comparison and threshold mapping.
//!
//! Three steps, each a pure function:
//!
//! 1. [`classify`] decides whether one slave is in sync with the master
//! 2. [`aggregate`] runs the classifier over the slaves in input order
//! 3. [`resolve_state`] maps the failure count onto a [`State`]
//!
//! [`evaluate`] composes them into an [`EvaluationResult`].

use crate::types::{
    Classification, EvaluationResult, SerialNumber, SerialObservation, ServerRecord, SlaveReport,
    State, SyncStatus, ToleranceConfig,
};

/// Failures collected over a slave set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    /// Number of failed slaves
    pub fail_count: usize,

    /// Failed slaves in input order
    pub failed_servers: Vec<ServerRecord>,

    /// Verdict for every slave in input order
    pub reports: Vec<SlaveReport>,
}

/// Compare one slave's serial against the master's.
///
/// With `tolerance == 0` any mismatch fails. Otherwise the slave may lag
/// the master by up to `tolerance` but may never be ahead of it. An
/// unresolved serial always fails as [`SyncStatus::TooFarBehind`].
#[must_use]
pub fn classify(
    master: SerialNumber,
    slave: SerialObservation,
    tolerance: u32,
) -> Classification {
    let SerialObservation::Resolved(serial) = slave else {
        return Classification {
            status: SyncStatus::TooFarBehind,
            delta: None,
        };
    };

    let delta = serial.lag_behind(master);

    let status = match (delta, tolerance) {
        (0, _) => SyncStatus::InSync,
        (d, 0) if d > 0 => SyncStatus::Behind,
        (d, _) if d < 0 => SyncStatus::Ahead,
        (d, t) if d <= i64::from(t) => SyncStatus::InSync,
        _ => SyncStatus::TooFarBehind,
    };

    Classification {
        status,
        delta: Some(delta),
    }
}

/// Classify every slave, keeping the failures in input order.
#[must_use]
pub fn aggregate(master: SerialNumber, slaves: &[ServerRecord], tolerance: u32) -> Aggregate {
    let mut result = Aggregate::default();

    for slave in slaves {
        let classification = classify(master, slave.serial, tolerance);

        if classification.is_failure() {
            result.fail_count += 1;
            result.failed_servers.push(slave.clone());
        }

        result.reports.push(SlaveReport {
            server: slave.clone(),
            classification,
        });
    }

    result
}

/// Map a failure count onto a state.
///
/// The critical threshold is checked before the warning threshold. Without
/// any threshold a single failure is critical. When only one threshold is
/// configured, failures at or below it are OK.
#[must_use]
pub fn resolve_state(fail_count: usize, warn: Option<u32>, crit: Option<u32>) -> State {
    let exceeds = |threshold: u32| fail_count > threshold as usize;

    match (warn, crit) {
        (_, Some(crit)) if exceeds(crit) => State::Critical,
        (Some(warn), _) if exceeds(warn) => State::Warning,
        (None, None) if fail_count > 0 => State::Critical,
        _ => State::Ok,
    }
}

/// Run a full evaluation pass.
#[must_use]
pub fn evaluate(
    master: SerialNumber,
    slaves: &[ServerRecord],
    config: &ToleranceConfig,
) -> EvaluationResult {
    let Aggregate {
        fail_count,
        failed_servers,
        reports,
    } = aggregate(master, slaves, config.serial_tolerance());

    EvaluationResult {
        master_serial: master,
        failed_servers,
        fail_count,
        state: resolve_state(fail_count, config.warn(), config.crit()),
        reports,
    }
}
