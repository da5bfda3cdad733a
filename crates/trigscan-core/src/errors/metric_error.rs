/// Errors from the metric evaluation step.
///
/// Any per-point failure aborts the whole evaluation: a partially annotated
/// point set is not a meaningful input for the cluster engine.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    #[error("template coordinates (tau0={y}, tau3={z}) are physically invalid: {reason}")]
    InvalidCoordinates { y: f64, z: f64, reason: String },

    #[error("noise-moment integration failed: {reason}")]
    MomentsFailed { reason: String },

    #[error("malformed noise PSD: {length} bins, delta_f={delta_f}")]
    MalformedPsd { length: usize, delta_f: f64 },
}
