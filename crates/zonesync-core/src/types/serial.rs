use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SOA serial number of a zone
///
/// Serials are compared as plain integers. RFC 1982 sequence-space
/// arithmetic is not applied, so a serial that wrapped past `u32::MAX`
/// looks far behind its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(u32);

impl SerialNumber {
    /// Wrap a raw serial value
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw serial value
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Linear lag of `self` behind `master` (`master - self`).
    ///
    /// Negative when this serial is ahead of the master.
    #[must_use]
    pub const fn lag_behind(self, master: Self) -> i64 {
        master.0 as i64 - self.0 as i64
    }
}

impl FromStr for SerialNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of asking one server for its serial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "serial")]
pub enum SerialObservation {
    /// The server answered with an SOA record
    Resolved(SerialNumber),
    /// The lookup failed, timed out or returned nothing
    Unresolved,
}

impl SerialObservation {
    /// Returns true if the lookup failed
    #[must_use]
    pub const fn is_unresolved(self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

impl fmt::Display for SerialObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(serial) => write!(f, "{serial}"),
            Self::Unresolved => write!(f, "unresolved"),
        }
    }
}
