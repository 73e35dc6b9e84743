//! Failure reason catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why a dependency failed the audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureReason {
    /// No license could be detected
    Missing,
    /// A license was detected but is not allowed by policy
    Incompatible,
}

impl FailureReason {
    pub const ALL: [FailureReason; 2] = [FailureReason::Missing, FailureReason::Incompatible];

    /// Raw reason code, as it appears in audit results and the JUnit `type` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureReason::Missing => "missing",
            FailureReason::Incompatible => "incompatible",
        }
    }

    /// Human-readable sentence for the reason.
    pub const fn description(self) -> &'static str {
        match self {
            FailureReason::Missing => "License could not be found.",
            FailureReason::Incompatible => "License is incompatible.",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FailureReason::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| format!("Unknown failure reason: {}", s))
    }
}
