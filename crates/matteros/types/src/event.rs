//! Matter history events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable entry in a matter's history, ordered by occurrence time
/// for timeline display. The ledger itself lives upstream; this is the
/// read-side record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatterEventRecord {
    /// Unique event identifier, e.g. `EV-2001`.
    pub id: String,

    /// Matter this event belongs to.
    pub matter_id: String,

    /// When the event occurred.
    pub occurred_at: DateTime<Utc>,

    /// Acting party ("Attorney", "System", ...).
    pub actor: String,

    /// Event type label, e.g. `STAGE_CHANGED`.
    pub event_type: String,

    /// Stage at the time of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    /// Human-readable description.
    pub description: String,
}
