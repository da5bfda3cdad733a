use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::errors::ClusterError;

/// Coordinate convention used for the clustering scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMethod {
    /// No clustering requested.
    None,
    /// Cluster in (tc, tau0, tau3). The only implemented convention.
    T0T3Tc,
    /// Cluster in (tc, psi0, psi3). Recognized but not implemented.
    Psi0Psi3Tc,
}

/// Post-Newtonian order forwarded to the metric oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PnOrder {
    Newtonian,
    OnePN,
    OnePointFivePN,
    TwoPN,
}

/// Waveform family forwarded to the metric oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Approximant {
    TaylorT1,
    TaylorT3,
    TaylorF2,
    Eob,
}

/// Trigger-clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrigScanConfig {
    /// Which coordinate convention to cluster in.
    pub scan_method: ScanMethod,
    /// Append unclustered triggers verbatim to the output.
    pub append_stragglers: bool,
    /// Safety factor by which the metric ellipsoids are inflated.
    pub safety_factor: f64,
    /// Minimal match of the coarse template bank, in [0, 1).
    pub minimal_match: f64,
    /// Lower frequency cutoff in Hz.
    pub f_lower: f64,
    /// Upper frequency cutoff in Hz.
    pub f_upper: f64,
    /// Detector sampling rate in Hz.
    pub sampling_rate: f64,
    /// Post-Newtonian order of the templates.
    pub pn_order: PnOrder,
    /// Waveform approximant of the templates.
    pub approximant: Approximant,
}

impl Default for TrigScanConfig {
    fn default() -> Self {
        Self {
            scan_method: ScanMethod::T0T3Tc,
            append_stragglers: false,
            safety_factor: defaults::DEFAULT_SAFETY_FACTOR,
            minimal_match: defaults::DEFAULT_MINIMAL_MATCH,
            f_lower: defaults::DEFAULT_F_LOWER,
            f_upper: defaults::DEFAULT_F_UPPER,
            sampling_rate: defaults::DEFAULT_SAMPLING_RATE,
            pn_order: PnOrder::TwoPN,
            approximant: Approximant::TaylorF2,
        }
    }
}

impl TrigScanConfig {
    /// Reject configurations the metric scaling cannot work with.
    pub fn validate(&self) -> Result<(), ClusterError> {
        if !(0.0..1.0).contains(&self.minimal_match) {
            return Err(ClusterError::InvalidConfig {
                reason: format!("minimal_match {} outside [0, 1)", self.minimal_match),
            });
        }
        if self.safety_factor <= 0.0 {
            return Err(ClusterError::InvalidConfig {
                reason: format!("safety_factor {} must be positive", self.safety_factor),
            });
        }
        if self.f_lower <= 0.0 || self.f_upper <= self.f_lower {
            return Err(ClusterError::InvalidConfig {
                reason: format!(
                    "frequency bounds [{}, {}] are inverted or non-positive",
                    self.f_lower, self.f_upper
                ),
            });
        }
        if self.sampling_rate <= 0.0 {
            return Err(ClusterError::InvalidConfig {
                reason: format!("sampling_rate {} must be positive", self.sampling_rate),
            });
        }
        Ok(())
    }
}
