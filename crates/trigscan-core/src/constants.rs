/// Toolkit version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of independent coefficients of the symmetric 3x3 metric.
pub const METRIC_DIM: usize = 6;

/// Generalized-distance threshold for neighborhood membership.
/// Two points are neighbors when ds^2 under the probe's metric is <= 1.
pub const UNIT_DISTANCE_THRESHOLD: f64 = 1.0;

/// Default config scalars.
pub mod defaults {
    /// Safety factor applied to the metric scaling (the original's sf_volume).
    pub const DEFAULT_SAFETY_FACTOR: f64 = 1.0;
    /// Minimal match of the coarse template bank.
    pub const DEFAULT_MINIMAL_MATCH: f64 = 0.95;
    /// Lower frequency cutoff in Hz.
    pub const DEFAULT_F_LOWER: f64 = 40.0;
    /// Upper frequency cutoff in Hz.
    pub const DEFAULT_F_UPPER: f64 = 2048.0;
    /// Detector sampling rate in Hz.
    pub const DEFAULT_SAMPLING_RATE: f64 = 4096.0;
}
