//! Density-based expansion clustering over metric-annotated points.
//!
//! A DBSCAN-style scheme where the neighborhood of a point is the unit
//! ellipsoid of ITS OWN metric rather than a shared Euclidean ball. The
//! membership test is therefore asymmetric; the partition is still the
//! transitive closure of the directed reachability relation, seeded in
//! input order.

use std::collections::VecDeque;

use tracing::debug;
use trigscan_core::constants::UNIT_DISTANCE_THRESHOLD;
use trigscan_core::errors::ClusterError;

use crate::point::{ClusterLabel, TrigScanPoint};

/// Generalized squared distance from `probe` to `other` under the probe's
/// metric: `dx.G.dx` with dx = (Δtc, Δy, Δz) and G the symmetric 3x3 matrix
/// stored as (g00, g01, g02, g11, g12, g22).
fn metric_distance_sq(probe: &TrigScanPoint, other: &TrigScanPoint) -> f64 {
    let dx = other.tc_f64() - probe.tc_f64();
    let dy = other.y - probe.y;
    let dz = other.z - probe.z;
    let g = &probe.gamma;
    g[0] * dx * dx
        + g[3] * dy * dy
        + g[5] * dz * dz
        + 2.0 * (g[1] * dx * dy + g[2] * dx * dz + g[4] * dy * dz)
}

/// Indices of all still-unclassified points inside the probe's unit
/// ellipsoid, in master-list order. The probe itself is never included.
fn neighborhood(points: &[TrigScanPoint], probe_idx: usize) -> Vec<usize> {
    let probe = &points[probe_idx];
    points
        .iter()
        .enumerate()
        .filter(|(idx, q)| {
            *idx != probe_idx
                && q.label.is_unclassified()
                && metric_distance_sq(probe, q) <= UNIT_DISTANCE_THRESHOLD
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Cluster the point set in place; returns the number of clusters found.
///
/// Every point leaves this function labeled either `Noise` or `Member(id)`
/// with `1 <= id <= count`. Seeds whose neighborhood is empty revert to
/// `Noise`; all other points join the cluster of the seed that first
/// reaches them.
pub fn cluster(points: &mut [TrigScanPoint]) -> Result<u32, ClusterError> {
    if points.is_empty() {
        return Err(ClusterError::EmptyInput);
    }

    let mut current_id: u32 = 1;

    for seed in 0..points.len() {
        if !points[seed].label.is_unclassified() {
            continue;
        }

        // Assume the seed opens a cluster; revert to noise if nothing
        // agglomerates around it.
        points[seed].label = ClusterLabel::Member(current_id);

        if expand_cluster(points, seed, current_id) {
            debug!(cluster = current_id, seed, "cluster confirmed");
            current_id += 1;
        } else {
            points[seed].label = ClusterLabel::Noise;
        }
    }

    Ok(current_id - 1)
}

/// Breadth-first growth of one tentative cluster. Returns false when the
/// seed attracted no neighbors at all.
fn expand_cluster(points: &mut [TrigScanPoint], seed: usize, id: u32) -> bool {
    let initial = neighborhood(points, seed);
    if initial.is_empty() {
        return false;
    }

    let mut worklist: VecDeque<usize> = VecDeque::from(initial);

    while let Some(idx) = worklist.pop_front() {
        // A point can sit in the worklist more than once; it is labeled and
        // expanded only the first time it surfaces.
        if !points[idx].label.is_unclassified() {
            continue;
        }
        points[idx].label = ClusterLabel::Member(id);

        for neighbor in neighborhood(points, idx) {
            worklist.push_back(neighbor);
        }
    }

    true
}
