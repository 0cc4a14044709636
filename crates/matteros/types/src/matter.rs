//! Matter records and their at-risk projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ExposureState;

/// Canonical matter record.
///
/// Invariant: `id` and `title` are non-empty. The normalizer drops any
/// upstream record that cannot satisfy this rather than admitting a record
/// with blank identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatterRecord {
    /// Unique matter identifier, e.g. `MAT-1024`. Minted upstream.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Client the matter is run for.
    pub client_name: String,

    /// Categorical matter type, e.g. `WORK_PERMIT_EXTENSION`.
    #[serde(rename = "type")]
    pub matter_type: String,

    /// Current stage label, e.g. `QUALITY_ASSURANCE`.
    pub stage: String,

    /// Exposure classification.
    pub exposure_state: ExposureState,

    /// Hard deadline, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_at: Option<DateTime<Utc>>,

    /// When the matter was opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_at: Option<DateTime<Utc>>,

    /// Policy snapshot the last clearance decision was made under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_snapshot_id: Option<String>,
}

/// Projection of a matter used for ranking in the exposure window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskMatter {
    /// Unique matter identifier. Non-empty.
    pub id: String,

    /// Display title. Non-empty.
    pub title: String,

    /// Categorical matter type.
    #[serde(rename = "type")]
    pub matter_type: String,

    /// Current stage label.
    pub stage: String,

    /// Exposure classification.
    pub exposure_state: ExposureState,

    /// Human-readable reasons the matter is flagged.
    pub reasons: Vec<String>,

    /// Last time the matter made material progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_progress_at: Option<DateTime<Utc>>,

    /// Hard deadline, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matter_type_serializes_as_type() {
        let matter = MatterRecord {
            id: "MAT-1".into(),
            title: "T".into(),
            client_name: "C".into(),
            matter_type: "PR".into(),
            stage: "FILED".into(),
            exposure_state: ExposureState::Stable,
            deadline_at: None,
            opened_at: None,
            policy_snapshot_id: None,
        };
        let json = serde_json::to_value(&matter).unwrap();
        assert_eq!(json["type"], "PR");
        assert!(json.get("deadlineAt").is_none());
    }
}
