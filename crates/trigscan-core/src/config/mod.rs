//! Clustering configuration.
//!
//! All knobs are explicit values threaded through calls; there is no
//! process-wide verbosity or error-policy state.

mod trigscan_config;

pub use trigscan_config::{Approximant, PnOrder, ScanMethod, TrigScanConfig};
