//! Property tests for the expansion cluster engine.

use proptest::prelude::*;

use trigscan_core::event::GpsTime;
use trigscan_cluster::engine;
use trigscan_cluster::point::{ClusterLabel, TrigScanPoint};

fn make_point(tc: f64, y: f64, z: f64, g: f64) -> TrigScanPoint {
    let seconds = tc.floor() as i64;
    let nanoseconds = ((tc - tc.floor()) * 1e9).round() as i32;
    TrigScanPoint {
        y,
        z,
        tc: GpsTime::new(800_000_000 + seconds, nanoseconds),
        rho: 8.0,
        eff_distance: 40.0,
        chisq: 0.0,
        is_valid: true,
        gamma: [g, 0.0, 0.0, g, 0.0, g],
        label: ClusterLabel::Unclassified,
    }
}

/// Arbitrary point sets: coordinates in a small box, per-point diagonal
/// metric weight spanning tight to wide ellipsoids.
fn arb_points() -> impl Strategy<Value = Vec<TrigScanPoint>> {
    prop::collection::vec(
        (
            0.0f64..100.0,   // tc offset
            0.0f64..50.0,    // y
            0.0f64..5.0,     // z
            0.01f64..1000.0, // metric weight
        ),
        1..40,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(tc, y, z, g)| make_point(tc, y, z, g))
            .collect()
    })
}

/// Cluster membership as sets of point indices, ignoring id numbering.
fn membership(points: &[TrigScanPoint]) -> Vec<Vec<usize>> {
    let mut clusters: std::collections::BTreeMap<u32, Vec<usize>> = Default::default();
    for (idx, p) in points.iter().enumerate() {
        if let ClusterLabel::Member(id) = p.label {
            clusters.entry(id).or_default().push(idx);
        }
    }
    clusters.into_values().collect()
}

proptest! {
    #[test]
    fn prop_no_point_left_unclassified(points in arb_points()) {
        let mut points = points;
        engine::cluster(&mut points).unwrap();
        prop_assert!(points.iter().all(|p| !p.label.is_unclassified()));
    }
}

proptest! {
    #[test]
    fn prop_member_ids_are_within_cluster_count(points in arb_points()) {
        let mut points = points;
        let count = engine::cluster(&mut points).unwrap();
        for p in &points {
            if let ClusterLabel::Member(id) = p.label {
                prop_assert!(id >= 1 && id <= count);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_reclustering_reset_input_preserves_membership(points in arb_points()) {
        let mut first = points.clone();
        let n1 = engine::cluster(&mut first).unwrap();

        // Reset labels and run again: same partition by membership.
        let mut second = points;
        let n2 = engine::cluster(&mut second).unwrap();

        prop_assert_eq!(n1, n2);
        prop_assert_eq!(membership(&first), membership(&second));
    }
}

proptest! {
    #[test]
    fn prop_every_cluster_has_at_least_two_members(points in arb_points()) {
        // A seed that attracts nothing reverts to noise, so no singleton
        // clusters can survive.
        let mut points = points;
        engine::cluster(&mut points).unwrap();
        for cluster in membership(&points) {
            prop_assert!(cluster.len() >= 2);
        }
    }
}
