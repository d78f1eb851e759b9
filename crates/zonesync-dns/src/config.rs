//! Lookup configuration types.

use std::time::Duration;

/// Default per-lookup timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default DNS port
pub const DEFAULT_PORT: u16 = 53;

/// Retry configuration for per-slave lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Additional attempts after the first failure
    pub max_retries: u32,

    /// Delay before the first retry, doubled for each further one
    pub initial_backoff: Duration,

    /// Upper bound for the delay between attempts
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfig {
    /// No retries
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(2),
        }
    }

    /// Set maximum retries
    #[must_use]
    pub const fn max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set initial backoff duration
    #[must_use]
    pub const fn initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set maximum backoff duration
    #[must_use]
    pub const fn max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Calculate backoff before retry number `attempt` (0-based)
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

/// How lookups are performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupConfig {
    /// Per-lookup timeout
    pub timeout: Duration,

    /// Port queried on every name server
    pub port: u16,

    /// Query slaves concurrently instead of one after another
    pub parallel: bool,

    /// Retry policy for slave lookups
    pub retry: RetryConfig,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            port: DEFAULT_PORT,
            parallel: false,
            retry: RetryConfig::new(),
        }
    }
}

impl LookupConfig {
    /// Set the per-lookup timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the name server port
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Query slaves concurrently
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the retry policy
    #[must_use]
    pub const fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
