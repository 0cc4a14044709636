//! Exposure and posture classifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal risk classification of a single matter.
///
/// Variant order is severity order; `Ord` on this enum is the severity
/// ranking used everywhere a matter list is sorted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExposureState {
    /// No open signal on the matter.
    Stable,

    /// A soft signal exists (jurisdictional delay risk, freshness decline).
    /// Also the conservative default for unrecognized upstream values.
    #[default]
    Monitoring,

    /// Attorney review required before the matter can progress.
    ReviewRequired,

    /// A policy or eligibility shift put the matter's strategy at risk.
    StrategicRisk,
}

impl ExposureState {
    /// Severity rank used as the primary sort key (`StrategicRisk` = 3).
    pub fn severity(self) -> u8 {
        match self {
            ExposureState::Stable => 0,
            ExposureState::Monitoring => 1,
            ExposureState::ReviewRequired => 2,
            ExposureState::StrategicRisk => 3,
        }
    }

    /// Parse an upstream wire value. Anything outside the closed set maps to
    /// `Monitoring` rather than `Stable`, so a bad value never suppresses
    /// signal.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "STABLE" => ExposureState::Stable,
            "MONITORING" => ExposureState::Monitoring,
            "REVIEW_REQUIRED" => ExposureState::ReviewRequired,
            "STRATEGIC_RISK" => ExposureState::StrategicRisk,
            _ => ExposureState::Monitoring,
        }
    }
}

impl fmt::Display for ExposureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExposureState::Stable => write!(f, "Stable"),
            ExposureState::Monitoring => write!(f, "Monitoring"),
            ExposureState::ReviewRequired => write!(f, "Review Required"),
            ExposureState::StrategicRisk => write!(f, "Strategic Risk"),
        }
    }
}

/// Whole-dashboard urgency classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationalPosture {
    /// No countable signal anywhere. Silence is definitionally stable.
    Stable,

    /// At least one concrete signal: escalations, near deadlines, or
    /// review-required matters.
    AttentionRequired,

    /// Strategic risk present or a deadline within 24 hours.
    ImmediateRisk,
}

impl fmt::Display for OperationalPosture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationalPosture::Stable => write!(f, "Stable"),
            OperationalPosture::AttentionRequired => write!(f, "Attention Required"),
            OperationalPosture::ImmediateRisk => write!(f, "Immediate Risk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_enum_order() {
        assert!(ExposureState::Stable < ExposureState::Monitoring);
        assert!(ExposureState::Monitoring < ExposureState::ReviewRequired);
        assert!(ExposureState::ReviewRequired < ExposureState::StrategicRisk);
        assert_eq!(ExposureState::StrategicRisk.severity(), 3);
    }

    #[test]
    fn unknown_wire_value_defaults_to_monitoring() {
        assert_eq!(
            ExposureState::from_wire("UNKNOWN_VALUE"),
            ExposureState::Monitoring
        );
        assert_eq!(ExposureState::from_wire(""), ExposureState::Monitoring);
    }

    #[test]
    fn wire_roundtrip() {
        let json = serde_json::to_string(&ExposureState::StrategicRisk).unwrap();
        assert_eq!(json, "\"STRATEGIC_RISK\"");
        let back: ExposureState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ExposureState::StrategicRisk);
    }
}
