//! Trait seams to the external physics routines.

mod oracle;

pub use oracle::{IMetricOracle, NoiseMoments, TemplateParams, MOMENT_COUNT};
