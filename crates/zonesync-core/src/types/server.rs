use serde::{Deserialize, Serialize};

use super::{SerialNumber, SerialObservation};

/// A name server and the serial it reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Host name or IP address as supplied or discovered
    pub address: String,

    /// Serial reported by this server
    pub serial: SerialObservation,
}

impl ServerRecord {
    /// Create a record from an observation
    #[must_use]
    pub fn new(address: impl Into<String>, serial: SerialObservation) -> Self {
        Self {
            address: address.into(),
            serial,
        }
    }

    /// Create a record for a server that answered with `serial`
    #[must_use]
    pub fn resolved(address: impl Into<String>, serial: u32) -> Self {
        Self::new(address, SerialObservation::Resolved(SerialNumber::new(serial)))
    }

    /// Create a record for a server whose lookup failed
    #[must_use]
    pub fn unresolved(address: impl Into<String>) -> Self {
        Self::new(address, SerialObservation::Unresolved)
    }
}
