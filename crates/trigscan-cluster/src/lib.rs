//! # trigscan-cluster
//!
//! Density-based clustering of inspiral triggers in the (tc, tau0, tau3)
//! template space, with neighborhoods defined by a locally computed
//! metric tensor instead of a Euclidean ball.
//!
//! Pipeline: build points → annotate metrics → expand clusters → assemble
//! representatives. `driver::cluster_over_templates_and_end_time` is the
//! entry point.

pub mod driver;
pub mod engine;
pub mod inspiral;
pub mod metric;
pub mod output;
pub mod point;

pub use driver::cluster_over_templates_and_end_time;
pub use inspiral::InspiralOracle;
pub use output::ClusterOutputEntry;
pub use point::{ClusterLabel, TrigScanPoint};
