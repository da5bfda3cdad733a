//! Top-level orchestration: validate, annotate metrics, cluster, rewrite
//! the caller's trigger list.

use tracing::{info, warn};
use trigscan_core::errors::{ClusterError, TrigScanResult};
use trigscan_core::traits::IMetricOracle;
use trigscan_core::{RealFrequencySeries, ScanMethod, SnglInspiral, TrigScanConfig};

use crate::engine;
use crate::metric;
use crate::output;
use crate::point::TrigScanPoint;

/// Cluster a trigger list over template coordinates and end time.
///
/// On success under an implemented scan method, `events` is rewritten in
/// place to hold one ORIGINAL row per output record (cluster representatives
/// first, then stragglers when enabled); rows not selected are dropped.
/// Fields the clustering core never reads are carried through untouched
/// because whole rows are cloned by master index.
///
/// A recognized-but-unimplemented method (`Psi0Psi3Tc`, `None`) is not an
/// error: a warning is logged, zero is returned, and `events` is left
/// exactly as given.
///
/// Returns the caller-visible record count: clusters found, plus appended
/// stragglers when `config.append_stragglers` is set.
pub fn cluster_over_templates_and_end_time(
    events: &mut Vec<SnglInspiral>,
    psd: &RealFrequencySeries,
    config: &TrigScanConfig,
    oracle: &dyn IMetricOracle,
) -> TrigScanResult<u32> {
    if events.is_empty() {
        return Err(ClusterError::EmptyInput);
    }
    config.validate()?;
    if !psd.is_well_formed() {
        return Err(ClusterError::InvalidConfig {
            reason: format!(
                "noise PSD must have more than one bin and positive delta_f \
                 (got {} bins, delta_f={})",
                psd.len(),
                psd.delta_f
            ),
        });
    }

    info!(count = events.len(), method = ?config.scan_method, "trigscan input");

    match config.scan_method {
        ScanMethod::T0T3Tc => {}
        ScanMethod::Psi0Psi3Tc | ScanMethod::None => {
            warn!(
                method = ?config.scan_method,
                "trigscan clustering is not available for this scan method"
            );
            return Ok(0);
        }
    }

    // Field-by-field projection into the master list.
    let mut master: Vec<TrigScanPoint> = events
        .iter()
        .map(|e| TrigScanPoint::from_event(e, config.scan_method))
        .collect();

    metric::compute_metrics(&mut master, psd, config, oracle)?;

    let cluster_count = engine::cluster(&mut master)?;
    info!(clusters = cluster_count, "expansion clustering complete");

    let entries = output::assemble(&master, cluster_count, config.append_stragglers);

    // Rewrite the caller's list with the surviving original rows. An empty
    // output (no clusters, no stragglers requested) clears the list: "no
    // clusters found" is a real outcome, distinct from the early exit above.
    let filtered: Vec<SnglInspiral> = entries
        .iter()
        .map(|entry| events[entry.master_index].clone())
        .collect();
    *events = filtered;

    Ok(entries.len() as u32)
}
