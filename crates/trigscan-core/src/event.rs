//! Detection-event records: GPS timestamps and single-detector trigger rows.

use serde::{Deserialize, Serialize};

/// A GPS timestamp split into integer seconds and nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GpsTime {
    pub seconds: i64,
    pub nanoseconds: i32,
}

impl GpsTime {
    pub fn new(seconds: i64, nanoseconds: i32) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    /// Both components combined into one real value, in seconds.
    ///
    /// Precision loss is acceptable here: the combined value only enters
    /// coordinate DIFFERENCES between triggers that lie at most minutes apart.
    pub fn as_f64(&self) -> f64 {
        self.seconds as f64 + self.nanoseconds as f64 * 1e-9
    }
}

/// One single-detector inspiral trigger.
///
/// The clustering core reads `end_time`, `snr`, `eff_distance`, `chisq` and
/// the template coordinates `tau0`/`tau3`; every other field is carried
/// through untouched when the driver rewrites a filtered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnglInspiral {
    /// Detector name, e.g. "H1".
    pub ifo: String,
    /// Coalescence time of the trigger.
    pub end_time: GpsTime,
    /// Signal-to-noise ratio of the match.
    pub snr: f64,
    /// Effective distance in Mpc.
    pub eff_distance: f64,
    /// Chi-squared veto statistic.
    pub chisq: f64,
    /// Newtonian chirp-time coordinate of the matched template, in seconds.
    pub tau0: f64,
    /// 1.5PN chirp-time coordinate of the matched template, in seconds.
    pub tau3: f64,
    /// Component masses in solar masses.
    pub mass1: f64,
    pub mass2: f64,
    /// Row identifier assigned by the search pipeline.
    pub event_id: u64,
}
