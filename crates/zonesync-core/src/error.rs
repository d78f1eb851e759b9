use thiserror::Error;

/// Result type alias for zonesync operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Invalid or contradictory check configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Warning threshold is above the critical threshold
    #[error("warning threshold ({warn}) must not exceed critical threshold ({crit})")]
    ThresholdOrder {
        /// Configured warning threshold
        warn: u32,
        /// Configured critical threshold
        crit: u32,
    },

    /// A required option was not supplied
    #[error("missing required option: {0}")]
    Missing(&'static str),

    /// An option value could not be used
    #[error("invalid value for {option}: {reason}")]
    InvalidValue {
        /// Option name as the user typed it
        option: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Errors that abort a check before a verdict is reached
#[derive(Error, Debug)]
pub enum CoreError {
    /// Bad or contradictory configuration
    #[error("configuration error: {0}")]
    Config(ConfigError),

    /// Master, master serial or slave list could not be determined
    #[error("resolution error: {0}")]
    Resolution(String),
}

impl From<ConfigError> for CoreError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl CoreError {
    /// Returns true if the error came from user input rather than DNS
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
