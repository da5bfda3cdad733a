//! Error handling for trigscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

mod cluster_error;
mod metric_error;

pub use cluster_error::{ClusterError, TrigScanResult};
pub use metric_error::MetricError;
