//! Composed per-page views with data provenance.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    AtRiskMatter, DashboardSummary, MatterEventRecord, MatterRecord, PolicySnapshotRecord,
};

/// Where a fetched slice of data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// Fetched from the configured API and normalized successfully.
    Live,

    /// The bundled dataset, used when no API is configured or the fetch
    /// failed for this slice.
    Fallback,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::Live => write!(f, "live"),
            DataOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// Per-slice provenance for the command bridge view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandCenterSource {
    pub dashboard: DataOrigin,
    pub at_risk: DataOrigin,
}

/// Everything the command bridge renders from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandCenterData {
    pub dashboard: DashboardSummary,
    pub at_risk_matters: Vec<AtRiskMatter>,
    pub source: CommandCenterSource,
}

/// The matters index view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MattersListData {
    pub matters: Vec<MatterRecord>,
    pub source: DataOrigin,
}

/// Per-slice provenance for a matter detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatterDetailSource {
    pub matter: DataOrigin,
    pub events: DataOrigin,
    pub policy_snapshot: DataOrigin,
}

/// A single matter with its timeline and linked policy snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatterDetailData {
    pub matter: MatterRecord,
    pub events: Vec<MatterEventRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_snapshot: Option<PolicySnapshotRecord>,
    pub source: MatterDetailSource,
}

/// The policy snapshot index view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySnapshotsData {
    pub snapshots: Vec<PolicySnapshotRecord>,
    pub source: DataOrigin,
}
