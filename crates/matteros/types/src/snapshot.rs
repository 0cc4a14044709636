//! Policy snapshot records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable record of the policy baseline a clearance decision was made
/// under. Once captured it is never mutated or deleted; the upstream system
/// enforces that, and this record only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySnapshotRecord {
    /// Unique snapshot identifier, e.g. `PS-2026-0001`.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Link to the captured source document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Matters cleared under this snapshot.
    pub impacted_matter_ids: Vec<String>,

    /// When the snapshot was captured.
    pub captured_at: DateTime<Utc>,

    /// Who captured it.
    pub captured_by: String,

    /// Source body and publication, e.g. "USCIS Policy Manual Vol. 2 Part H".
    pub policy_source: String,

    /// Version string of the policy material.
    pub policy_version: String,

    /// Jurisdiction the policy applies to.
    pub jurisdiction: String,

    /// Clearance decision text recorded at capture time.
    pub clearance_decision: String,

    /// Rationale for the decision.
    pub rationale: String,

    /// Content hash sealing the snapshot, e.g. `sha256:...`.
    pub immutable_hash: String,
}
