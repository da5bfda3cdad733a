//! # trigscan-core
//!
//! Foundation crate for the trigscan clustering toolkit.
//! Defines the event and frequency-series types, errors, config, constants,
//! and the metric-oracle trait. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod series;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{Approximant, PnOrder, ScanMethod, TrigScanConfig};
pub use errors::{ClusterError, MetricError, TrigScanResult};
pub use event::{GpsTime, SnglInspiral};
pub use series::RealFrequencySeries;
pub use traits::{IMetricOracle, NoiseMoments, TemplateParams};
