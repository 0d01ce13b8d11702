//! Wire contracts shared with the records API, plus the pure analytics that
//! the dashboard computes over fetched snapshots.

pub mod dashboards;
pub mod domain;
pub mod system;
