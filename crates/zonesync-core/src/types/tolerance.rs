use crate::error::ConfigError;

/// Failure thresholds and allowed serial lag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToleranceConfig {
    warn: Option<u32>,
    crit: Option<u32>,
    serial_tolerance: u32,
}

impl ToleranceConfig {
    /// Build a validated configuration.
    ///
    /// `serial_tolerance` of 0 requires every slave to match the master exactly.
    pub const fn new(
        warn: Option<u32>,
        crit: Option<u32>,
        serial_tolerance: u32,
    ) -> Result<Self, ConfigError> {
        if let (Some(warn), Some(crit)) = (warn, crit) {
            if warn > crit {
                return Err(ConfigError::ThresholdOrder { warn, crit });
            }
        }

        Ok(Self {
            warn,
            crit,
            serial_tolerance,
        })
    }

    /// Failure count above which the state is WARNING
    #[must_use]
    pub const fn warn(&self) -> Option<u32> {
        self.warn
    }

    /// Failure count above which the state is CRITICAL
    #[must_use]
    pub const fn crit(&self) -> Option<u32> {
        self.crit
    }

    /// Maximum lag behind the master that still counts as in sync
    #[must_use]
    pub const fn serial_tolerance(&self) -> u32 {
        self.serial_tolerance
    }
}
