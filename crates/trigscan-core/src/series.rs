//! Real-valued frequency series: the noise-PSD container consumed by the
//! metric evaluator.

use serde::{Deserialize, Serialize};

use crate::errors::MetricError;
use crate::event::GpsTime;

/// A uniformly sampled real frequency series.
///
/// Bin `k` holds the value at frequency `f0 + k * delta_f`. For the
/// clustering toolkit this is the one-sided noise power spectral density of
/// the detector, but nothing here assumes PSD semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealFrequencySeries {
    /// Human-readable name, e.g. "H1:psd".
    pub name: String,
    /// Epoch of the data stretch the series was estimated from.
    pub epoch: GpsTime,
    /// Frequency of bin 0, in Hz.
    pub f0: f64,
    /// Frequency resolution, in Hz.
    pub delta_f: f64,
    /// Sample values.
    pub data: Vec<f64>,
}

impl RealFrequencySeries {
    /// Create a series, rejecting a non-positive frequency resolution.
    pub fn new(
        name: impl Into<String>,
        epoch: GpsTime,
        f0: f64,
        delta_f: f64,
        data: Vec<f64>,
    ) -> Result<Self, MetricError> {
        if delta_f <= 0.0 {
            return Err(MetricError::MalformedPsd {
                length: data.len(),
                delta_f,
            });
        }
        Ok(Self {
            name: name.into(),
            epoch,
            f0,
            delta_f,
            data,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Frequency of bin `k`, in Hz.
    pub fn frequency_at(&self, k: usize) -> f64 {
        self.f0 + k as f64 * self.delta_f
    }

    /// The driver precondition: more than one bin and positive resolution.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() > 1 && self.delta_f > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_delta_f() {
        let err = RealFrequencySeries::new("psd", GpsTime::default(), 0.0, 0.0, vec![1.0, 2.0]);
        assert!(matches!(err, Err(MetricError::MalformedPsd { .. })));
    }

    #[test]
    fn single_bin_series_is_not_well_formed() {
        let s = RealFrequencySeries::new("psd", GpsTime::default(), 0.0, 0.25, vec![1.0]).unwrap();
        assert!(!s.is_well_formed());
    }

    #[test]
    fn frequency_at_respects_f0_and_resolution() {
        let s =
            RealFrequencySeries::new("psd", GpsTime::default(), 10.0, 0.5, vec![0.0; 8]).unwrap();
        assert_eq!(s.frequency_at(0), 10.0);
        assert_eq!(s.frequency_at(4), 12.0);
    }
}
