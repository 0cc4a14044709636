//! CLI command implementations

pub mod bridge;
pub mod matters;
pub mod snapshots;
