use serde::{Deserialize, Serialize};
use std::fmt;

/// Plugin exit code for [`State::Ok`]
pub const STATE_OK: i32 = 0;

/// Plugin exit code for [`State::Warning`]
pub const STATE_WARNING: i32 = 1;

/// Plugin exit code for [`State::Critical`]
pub const STATE_CRITICAL: i32 = 2;

/// Plugin exit code for [`State::Unknown`]
pub const STATE_UNKNOWN: i32 = 3;

/// Health verdict in monitoring plugin terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    /// All slaves are in sync or within thresholds
    Ok,
    /// Failures exceed the warning threshold
    Warning,
    /// Failures exceed the critical threshold
    Critical,
    /// The check could not be performed
    Unknown,
}

impl State {
    /// Process exit code expected by monitoring frameworks
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => STATE_OK,
            Self::Warning => STATE_WARNING,
            Self::Critical => STATE_CRITICAL,
            Self::Unknown => STATE_UNKNOWN,
        }
    }

    /// Word used in the summary line
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARN",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_plugin_convention() {
        assert_eq!(State::Ok.exit_code(), 0);
        assert_eq!(State::Warning.exit_code(), 1);
        assert_eq!(State::Critical.exit_code(), 2);
        assert_eq!(State::Unknown.exit_code(), 3);
    }

    #[test]
    fn warning_label_is_short() {
        assert_eq!(State::Warning.to_string(), "WARN");
        assert_eq!(State::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&State::Warning).unwrap(), "\"WARNING\"");
    }
}
