use serde::{Deserialize, Serialize};

use super::{SerialNumber, ServerRecord, State};

/// Why a slave was judged in sync or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Same serial as the master, or lagging within tolerance
    InSync,
    /// Behind the master with no tolerance configured
    Behind,
    /// Behind the master by more than the tolerance, or unresolved
    TooFarBehind,
    /// Serial greater than the master's
    Ahead,
}

impl SyncStatus {
    /// Returns true if this status counts against the slave
    #[must_use]
    pub const fn is_failure(self) -> bool {
        !matches!(self, Self::InSync)
    }
}

/// Verdict for a single slave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Sync status
    pub status: SyncStatus,

    /// `master - slave`; `None` when the slave serial is unknown
    pub delta: Option<i64>,
}

impl Classification {
    /// Returns true if the slave failed
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status.is_failure()
    }
}

/// A slave together with its verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaveReport {
    /// The slave and the serial it reported
    pub server: ServerRecord,

    /// How it compares to the master
    pub classification: Classification,
}

/// Outcome of one evaluation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Serial the slaves were compared against
    pub master_serial: SerialNumber,

    /// Failed slaves in the order they were checked
    pub failed_servers: Vec<ServerRecord>,

    /// Number of failed slaves
    pub fail_count: usize,

    /// Final verdict
    pub state: State,

    /// Every slave's verdict in the order they were checked
    #[serde(default)]
    pub reports: Vec<SlaveReport>,
}

impl EvaluationResult {
    /// Addresses of the failed slaves
    pub fn failed_addresses(&self) -> impl Iterator<Item = &str> {
        self.failed_servers.iter().map(|s| s.address.as_str())
    }
}
