use super::MetricError;

/// Errors that can abort a clustering invocation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("empty trigger list: clustering requires at least one point")]
    EmptyInput,

    #[error("invalid scan method: {method}")]
    InvalidMethod { method: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("metric evaluation failed: {0}")]
    Metric(#[from] MetricError),
}

/// Crate-wide result alias.
pub type TrigScanResult<T> = Result<T, ClusterError>;
