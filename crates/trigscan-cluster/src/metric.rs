//! Metric evaluation: annotate every point with its local metric.
//!
//! The metric is computed in (tc, tau0, tau3) by the external oracle and
//! scaled down by `safety_factor * (1 - minimal_match)`, so that the unit
//! ellipsoid of the scaled metric is the match contour the clustering
//! neighborhoods use.

use tracing::debug;
use trigscan_core::errors::MetricError;
use trigscan_core::traits::IMetricOracle;
use trigscan_core::{RealFrequencySeries, TrigScanConfig};

use crate::point::TrigScanPoint;

/// Compute and store the scaled metric for every point.
///
/// The noise moments are integrated once, primed with the first point's
/// template, and reused for the whole set. Any per-point failure aborts the
/// evaluation with no partial results left behind (`gamma` of earlier points
/// may have been written, but the caller discards the set on error).
pub fn compute_metrics(
    points: &mut [TrigScanPoint],
    psd: &RealFrequencySeries,
    config: &TrigScanConfig,
    oracle: &dyn IMetricOracle,
) -> Result<(), MetricError> {
    if points.is_empty() {
        return Ok(());
    }
    if !psd.is_well_formed() {
        return Err(MetricError::MalformedPsd {
            length: psd.len(),
            delta_f: psd.delta_f,
        });
    }

    // The moments only need SOME valid template to fix the integration
    // band; the first point primes it.
    let seed = &points[0];
    let primer = oracle.template_params(seed.y, seed.z, config)?;
    let moments = oracle.noise_moments(psd, &primer)?;
    debug!(
        oracle = oracle.name(),
        f_ref = moments.f_ref,
        "noise moments integrated"
    );

    let scale = 1.0 / (config.safety_factor * (1.0 - config.minimal_match));

    for point in points.iter_mut() {
        let params = oracle.template_params(point.y, point.z, config)?;
        let coeffs = oracle.metric_coeffs(&params, &moments)?;
        for (g, c) in point.gamma.iter_mut().zip(coeffs.iter()) {
            *g = c * scale;
        }
    }

    Ok(())
}
