//! Internal point representation for one clustering invocation.

use trigscan_core::event::{GpsTime, SnglInspiral};
use trigscan_core::ScanMethod;

/// Cluster assignment of one point.
///
/// Transitions are strictly one-way: every point starts `Unclassified` and
/// ends as exactly one of `Noise` or `Member(id)`. A point never leaves a
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterLabel {
    Unclassified,
    Noise,
    Member(u32),
}

impl ClusterLabel {
    pub fn is_unclassified(&self) -> bool {
        matches!(self, ClusterLabel::Unclassified)
    }

    pub fn is_noise(&self) -> bool {
        matches!(self, ClusterLabel::Noise)
    }
}

/// One trigger projected into the clustering coordinates.
///
/// `gamma` holds the six independent coefficients (g00, g01, g02, g11, g12,
/// g22) of the local symmetric 3x3 metric in (tc, y, z), already scaled by
/// `1 / (safety_factor * (1 - minimal_match))`.
#[derive(Debug, Clone)]
pub struct TrigScanPoint {
    /// First reduced template coordinate (tau0 under `T0T3Tc`).
    pub y: f64,
    /// Second reduced template coordinate (tau3 under `T0T3Tc`).
    pub z: f64,
    /// Coalescence time.
    pub tc: GpsTime,
    /// Detection statistic (SNR).
    pub rho: f64,
    pub eff_distance: f64,
    pub chisq: f64,
    pub is_valid: bool,
    /// Scaled local metric coefficients. Zero until the evaluator runs.
    pub gamma: [f64; 6],
    pub label: ClusterLabel,
}

impl TrigScanPoint {
    /// Field-by-field projection of one trigger row under the given
    /// coordinate convention.
    pub fn from_event(event: &SnglInspiral, method: ScanMethod) -> Self {
        let (y, z) = match method {
            ScanMethod::T0T3Tc => (event.tau0, event.tau3),
            // Psi0Psi3Tc never reaches point construction; the driver bails
            // out first. The coordinates are left at zero.
            ScanMethod::Psi0Psi3Tc | ScanMethod::None => (0.0, 0.0),
        };
        Self {
            y,
            z,
            tc: event.end_time,
            rho: event.snr,
            eff_distance: event.eff_distance,
            chisq: event.chisq,
            is_valid: true,
            gamma: [0.0; 6],
            label: ClusterLabel::Unclassified,
        }
    }

    /// Combined coalescence time in seconds.
    pub fn tc_f64(&self) -> f64 {
        self.tc.as_f64()
    }
}
