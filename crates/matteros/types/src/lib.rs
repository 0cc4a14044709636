//! MatterOS Types - Canonical data model for the matter risk dashboard
//!
//! Every record in this crate is read-only from the dashboard's perspective:
//! matters, events, and policy snapshots are created and mutated exclusively
//! by the upstream case-management backend (or synthesized once from the
//! bundled fallback dataset), fetched per render, and discarded afterwards.
//!
//! # Key Concepts
//!
//! - **Exposure state**: ordinal per-matter risk classification
//!   (`Stable < Monitoring < ReviewRequired < StrategicRisk`).
//! - **Operational posture**: whole-dashboard urgency classification derived
//!   from counters and deadlines.
//! - **Policy snapshot**: immutable record of the governing rule-set at the
//!   moment a clearance decision was made. Immutability is enforced upstream;
//!   this crate only carries the record.
//! - **Provenance**: every fetched slice is tagged [`DataOrigin::Live`] or
//!   [`DataOrigin::Fallback`] so consumers can disclose where data came from.
//!
//! This is a pure data crate; no IO and no clock reads happen here. All
//! types implement `Clone`, `Debug`, `Serialize`, `Deserialize`.

#![deny(unsafe_code)]

mod dashboard;
mod event;
mod exposure;
mod matter;
mod snapshot;
mod views;

pub use dashboard::{DashboardSummary, OperationalClosure, RiskCounts};
pub use event::MatterEventRecord;
pub use exposure::{ExposureState, OperationalPosture};
pub use matter::{AtRiskMatter, MatterRecord};
pub use snapshot::PolicySnapshotRecord;
pub use views::{
    CommandCenterData, CommandCenterSource, DataOrigin, MatterDetailData, MatterDetailSource,
    MattersListData, PolicySnapshotsData,
};
