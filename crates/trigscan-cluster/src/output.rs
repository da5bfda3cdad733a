//! Output assembly: one representative per cluster, optional stragglers.

use serde::{Deserialize, Serialize};
use tracing::debug;
use trigscan_core::event::GpsTime;

use crate::point::{ClusterLabel, TrigScanPoint};

/// One row of the clustering output, carrying enough to reconstruct the
/// original trigger via `master_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterOutputEntry {
    pub end_time: GpsTime,
    pub snr: f64,
    pub eff_distance: f64,
    /// Index of the represented point in the master list.
    pub master_index: usize,
}

impl ClusterOutputEntry {
    fn from_point(point: &TrigScanPoint, master_index: usize) -> Self {
        Self {
            end_time: point.tc,
            snr: point.rho,
            eff_distance: point.eff_distance,
            master_index,
        }
    }
}

/// Build the output list from a labeled master list.
///
/// Per cluster id, the member with the maximum detection statistic is
/// emitted; on a tie the first such member in master-list order wins. When
/// `append_stragglers` is set, every noise point is then appended verbatim
/// as its own row, and the caller-visible record count grows accordingly.
pub fn assemble(
    points: &[TrigScanPoint],
    cluster_count: u32,
    append_stragglers: bool,
) -> Vec<ClusterOutputEntry> {
    let mut out = Vec::with_capacity(cluster_count as usize);

    for id in 1..=cluster_count {
        let best = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.label == ClusterLabel::Member(id))
            .max_by(|(_, a), (_, b)| {
                // max_by keeps the LAST maximum; reversing on equality
                // preserves the first-in-list tie-break.
                a.rho
                    .partial_cmp(&b.rho)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(std::cmp::Ordering::Greater)
            });
        if let Some((idx, point)) = best {
            out.push(ClusterOutputEntry::from_point(point, idx));
        }
    }

    if append_stragglers {
        let before = out.len();
        for (idx, point) in points.iter().enumerate() {
            if point.label.is_noise() {
                out.push(ClusterOutputEntry::from_point(point, idx));
            }
        }
        debug!(stragglers = out.len() - before, "appended isolated triggers");
    }

    out
}
