use thiserror::Error;

/// Result type alias for DNS operations
pub type DnsResult<T> = std::result::Result<T, DnsError>;

/// Errors from zone lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// The query was sent but failed (NXDOMAIN, REFUSED, SERVFAIL, ...)
    #[error("{record} lookup for {domain} at {server} failed: {reason}")]
    Lookup {
        /// Record type queried
        record: &'static str,
        /// Zone queried
        domain: String,
        /// Server queried, or "system" for the local resolver
        server: String,
        /// Resolver error text
        reason: String,
    },

    /// The answer contained no usable records
    #[error("no {record} records for {domain} at {server}")]
    NoRecords {
        /// Record type queried
        record: &'static str,
        /// Zone queried
        domain: String,
        /// Server queried
        server: String,
    },

    /// No answer within the configured timeout
    #[error("{record} lookup for {domain} at {server} timed out after {seconds}s")]
    Timeout {
        /// Record type queried
        record: &'static str,
        /// Zone queried
        domain: String,
        /// Server queried
        server: String,
        /// Timeout that elapsed
        seconds: u64,
    },

    /// A name server host name could not be turned into an address
    #[error("cannot resolve name server {server}: {reason}")]
    ServerAddress {
        /// Name server as given
        server: String,
        /// Why resolution failed
        reason: String,
    },

    /// The system resolver could not be set up
    #[error("resolver setup failed: {0}")]
    Setup(String),

    /// The master advertises no other name servers
    #[error("no slave name servers found for {0}")]
    NoSlaves(String),
}

impl DnsError {
    /// Returns true if another attempt might succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Lookup { .. })
    }
}

impl From<DnsError> for zonesync_core::CoreError {
    fn from(err: DnsError) -> Self {
        Self::Resolution(err.to_string())
    }
}
