//! Snapshot Access
//!
//! Typed access to the pre-generated metric snapshot files.

pub mod client;

pub use client::{
    csv_path, fetch_metric, snapshot_path, MetricDocument, SnapshotError, SourceInfo, YearLabel,
};
