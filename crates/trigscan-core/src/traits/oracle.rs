use crate::config::TrigScanConfig;
use crate::errors::MetricError;
use crate::series::RealFrequencySeries;

/// Number of stored noise-moment integrals. Moment `q` weights the PSD
/// integrand by `(f/f_ref)^(-q/3)`; the metric consumes q up to 17.
pub const MOMENT_COUNT: usize = 18;

/// Full template description recovered from the reduced (tau0, tau3)
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateParams {
    pub tau0: f64,
    pub tau3: f64,
    /// Component masses in solar masses.
    pub mass1: f64,
    pub mass2: f64,
    pub total_mass: f64,
    /// Symmetric mass ratio, at most 0.25.
    pub eta: f64,
    /// Chirp mass in solar masses.
    pub chirp_mass: f64,
    /// Total duration of the template from `f_lower`, in seconds.
    pub t_chirp: f64,
    /// Frequency band the template sweeps, in Hz.
    pub f_lower: f64,
    pub f_final: f64,
}

/// Integrated noise moments, shared across every point of one invocation.
#[derive(Debug, Clone, Copy)]
pub struct NoiseMoments {
    /// Reference frequency the moments are normalized to, in Hz.
    pub f_ref: f64,
    /// `j[q]` holds the band integral of `(f/f_ref)^(-q/3) / S(f)`,
    /// normalized so that `j[7]` (the SPA signal-power moment) is 1.
    pub j: [f64; MOMENT_COUNT],
}

impl NoiseMoments {
    /// The normalized moment of order `q`.
    pub fn moment(&self, q: usize) -> f64 {
        self.j[q]
    }
}

/// The external physics oracle behind the metric evaluator.
///
/// Implementations translate reduced template coordinates into physical
/// parameters, integrate noise moments from a PSD, and produce the six
/// independent coefficients of the local 3x3 metric in (tc, tau0, tau3).
pub trait IMetricOracle: Send + Sync {
    /// Recover full template parameters from reduced coordinates.
    ///
    /// Fails when the (y, z) combination does not correspond to a physical
    /// template.
    fn template_params(
        &self,
        y: f64,
        z: f64,
        config: &TrigScanConfig,
    ) -> Result<TemplateParams, MetricError>;

    /// Integrate noise moments from the PSD. Expensive; called once per
    /// invocation and reused for every point.
    fn noise_moments(
        &self,
        psd: &RealFrequencySeries,
        params: &TemplateParams,
    ) -> Result<NoiseMoments, MetricError>;

    /// The six independent coefficients (g00, g01, g02, g11, g12, g22) of
    /// the metric at `params`, unscaled.
    fn metric_coeffs(
        &self,
        params: &TemplateParams,
        moments: &NoiseMoments,
    ) -> Result<[f64; 6], MetricError>;

    /// Human-readable oracle name.
    fn name(&self) -> &str;
}
