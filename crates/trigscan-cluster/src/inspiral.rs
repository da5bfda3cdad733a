//! Default metric oracle: stationary-phase inspiral templates over a
//! measured noise PSD.
//!
//! Coordinates follow the chirp-time convention: `tau0` is the Newtonian
//! chirp time, `tau3` the 1.5PN one, both from the lower cutoff frequency.
//! The metric is the Fisher matrix of the frequency-domain phase in
//! (tc, tau0, tau3) with the coalescence phase projected out, evaluated
//! with SPA amplitude weighting. Positive-definite by construction.

use std::f64::consts::PI;

use trigscan_core::errors::MetricError;
use trigscan_core::traits::{IMetricOracle, NoiseMoments, TemplateParams, MOMENT_COUNT};
use trigscan_core::{RealFrequencySeries, TrigScanConfig};

/// One solar mass in seconds (G = c = 1).
const T_SUN: f64 = 4.925_490_947e-6;

/// Innermost-stable-circular-orbit frequency for total mass `m` (seconds).
fn f_isco(total_mass_s: f64) -> f64 {
    1.0 / (6.0_f64.powf(1.5) * PI * total_mass_s)
}

/// Chirp-time parameterized inspiral oracle.
#[derive(Debug, Default)]
pub struct InspiralOracle;

impl InspiralOracle {
    pub fn new() -> Self {
        Self
    }
}

impl IMetricOracle for InspiralOracle {
    fn template_params(
        &self,
        y: f64,
        z: f64,
        config: &TrigScanConfig,
    ) -> Result<TemplateParams, MetricError> {
        let (tau0, tau3) = (y, z);
        if tau0 <= 0.0 || tau3 <= 0.0 {
            return Err(MetricError::InvalidCoordinates {
                y,
                z,
                reason: "chirp times must be positive".to_string(),
            });
        }

        let f0 = config.f_lower;

        // Invert the chirp-time relations:
        //   tau0 = (5/256) eta^-1 m^-5/3 (pi f0)^-8/3
        //   tau3 = (pi/8)  eta^-1 m^-2/3 (pi f0)^-5/3
        let total_mass_s = 5.0 / (32.0 * PI * PI * f0) * (tau3 / tau0);
        let eta = (PI / 8.0) / (total_mass_s.powf(2.0 / 3.0) * (PI * f0).powf(5.0 / 3.0) * tau3);

        if eta > 0.25 {
            return Err(MetricError::InvalidCoordinates {
                y,
                z,
                reason: format!("symmetric mass ratio {eta:.4} exceeds 0.25"),
            });
        }
        if eta <= 0.0 || !eta.is_finite() {
            return Err(MetricError::InvalidCoordinates {
                y,
                z,
                reason: "symmetric mass ratio is not positive".to_string(),
            });
        }

        let delta = (1.0 - 4.0 * eta).sqrt();
        let total_mass = total_mass_s / T_SUN;
        let mass1 = 0.5 * total_mass * (1.0 + delta);
        let mass2 = 0.5 * total_mass * (1.0 - delta);

        Ok(TemplateParams {
            tau0,
            tau3,
            mass1,
            mass2,
            total_mass,
            eta,
            chirp_mass: total_mass * eta.powf(0.6),
            t_chirp: tau0 + tau3,
            f_lower: f0,
            f_final: config.f_upper.min(f_isco(total_mass_s)),
        })
    }

    fn noise_moments(
        &self,
        psd: &RealFrequencySeries,
        params: &TemplateParams,
    ) -> Result<NoiseMoments, MetricError> {
        let f_ref = params.f_lower;
        let f_hi = params.f_final;
        if f_hi <= f_ref {
            return Err(MetricError::MomentsFailed {
                reason: format!("empty integration band [{f_ref}, {f_hi}] Hz"),
            });
        }

        let mut raw = [0.0_f64; MOMENT_COUNT];
        let mut bins = 0usize;

        for (k, &s) in psd.data.iter().enumerate() {
            let f = psd.frequency_at(k);
            if f < f_ref || f > f_hi {
                continue;
            }
            if s <= 0.0 {
                return Err(MetricError::MomentsFailed {
                    reason: format!("non-positive PSD value {s} at {f} Hz"),
                });
            }
            let x = f / f_ref;
            let weight = psd.delta_f / s;
            for (q, acc) in raw.iter_mut().enumerate() {
                *acc += x.powf(-(q as f64) / 3.0) * weight;
            }
            bins += 1;
        }

        if bins == 0 || raw[7] <= 0.0 {
            return Err(MetricError::MomentsFailed {
                reason: format!(
                    "no usable PSD bins in [{f_ref}, {f_hi}] Hz ({} bins total)",
                    psd.len()
                ),
            });
        }

        // Normalize to the SPA signal-power moment.
        let norm = raw[7];
        let mut j = [0.0_f64; MOMENT_COUNT];
        for (out, r) in j.iter_mut().zip(raw.iter()) {
            *out = r / norm;
        }

        Ok(NoiseMoments { f_ref, j })
    }

    fn metric_coeffs(
        &self,
        params: &TemplateParams,
        moments: &NoiseMoments,
    ) -> Result<[f64; 6], MetricError> {
        let j = &moments.j;
        let f0 = moments.f_ref;

        // Phase derivatives in x = f/f0 powers: d(tc) ~ x, d(tau0) ~ x^-5/3,
        // d(tau3) ~ x^-2/3, each times a constant coefficient.
        let a_tc = 2.0 * PI * f0;
        let a_t0 = 1.2 * PI * f0;
        let a_t3 = -2.0 * PI * f0;

        // gamma_ij = (1/2) a_i a_j (J(q_ij) - J(q_i) J(q_j)), the coalescence
        // phase already projected out through the first-moment subtraction.
        let g00 = 0.5 * a_tc * a_tc * (j[1] - j[4] * j[4]);
        let g01 = 0.5 * a_tc * a_t0 * (j[9] - j[4] * j[12]);
        let g02 = 0.5 * a_tc * a_t3 * (j[6] - j[4] * j[9]);
        let g11 = 0.5 * a_t0 * a_t0 * (j[17] - j[12] * j[12]);
        let g12 = 0.5 * a_t0 * a_t3 * (j[14] - j[12] * j[9]);
        let g22 = 0.5 * a_t3 * a_t3 * (j[11] - j[9] * j[9]);

        if g00 <= 0.0 || g11 <= 0.0 || g22 <= 0.0 {
            return Err(MetricError::MomentsFailed {
                reason: format!(
                    "metric diagonal is not positive at tau0={}, tau3={}",
                    params.tau0, params.tau3
                ),
            });
        }

        Ok([g00, g01, g02, g11, g12, g22])
    }

    fn name(&self) -> &str {
        "inspiral-spa"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigscan_core::event::GpsTime;

    fn flat_psd() -> RealFrequencySeries {
        // Flat unit PSD from 0 to 1024 Hz at 1 Hz resolution.
        RealFrequencySeries::new("flat", GpsTime::default(), 0.0, 1.0, vec![1.0; 1025]).unwrap()
    }

    fn config() -> TrigScanConfig {
        TrigScanConfig {
            f_lower: 40.0,
            f_upper: 1024.0,
            ..Default::default()
        }
    }

    /// Chirp times of an equal-mass binary, for round-trip checks.
    fn chirp_times(total_mass_sun: f64, eta: f64, f0: f64) -> (f64, f64) {
        let m = total_mass_sun * T_SUN;
        let tau0 = 5.0 / (256.0 * eta) * m.powf(-5.0 / 3.0) * (PI * f0).powf(-8.0 / 3.0);
        let tau3 = PI / 8.0 / eta * m.powf(-2.0 / 3.0) * (PI * f0).powf(-5.0 / 3.0);
        (tau0, tau3)
    }

    #[test]
    fn template_params_round_trip_masses() {
        let (tau0, tau3) = chirp_times(2.8, 0.25, 40.0);
        let params = InspiralOracle
            .template_params(tau0, tau3, &config())
            .unwrap();
        assert!((params.total_mass - 2.8).abs() < 1e-6);
        assert!((params.eta - 0.25).abs() < 1e-9);
        assert!((params.mass1 - 1.4).abs() < 1e-6);
        assert!((params.mass2 - 1.4).abs() < 1e-6);
    }

    #[test]
    fn non_positive_chirp_times_are_rejected() {
        let err = InspiralOracle.template_params(-1.0, 0.5, &config());
        assert!(matches!(err, Err(MetricError::InvalidCoordinates { .. })));
    }

    #[test]
    fn unphysical_eta_is_rejected() {
        // A large tau0 with tiny tau3 drives eta far above 0.25.
        let (tau0, tau3) = chirp_times(2.8, 0.25, 40.0);
        let err = InspiralOracle.template_params(tau0 * 50.0, tau3, &config());
        assert!(matches!(err, Err(MetricError::InvalidCoordinates { .. })));
    }

    #[test]
    fn moments_are_normalized_to_the_power_moment() {
        let (tau0, tau3) = chirp_times(2.8, 0.25, 40.0);
        let params = InspiralOracle
            .template_params(tau0, tau3, &config())
            .unwrap();
        let moments = InspiralOracle.noise_moments(&flat_psd(), &params).unwrap();
        assert!((moments.j[7] - 1.0).abs() < 1e-12);
        // Above f_ref the integrand shrinks with the moment order.
        assert!(moments.j[17] < moments.j[11]);
        assert!(moments.j[11] < moments.j[7]);
    }

    #[test]
    fn moments_fail_outside_the_psd_band() {
        let (tau0, tau3) = chirp_times(2.8, 0.25, 40.0);
        let params = InspiralOracle
            .template_params(tau0, tau3, &config())
            .unwrap();
        // PSD covering only 0..10 Hz; the band starts at 40 Hz.
        let psd =
            RealFrequencySeries::new("low", GpsTime::default(), 0.0, 1.0, vec![1.0; 10]).unwrap();
        let err = InspiralOracle.noise_moments(&psd, &params);
        assert!(matches!(err, Err(MetricError::MomentsFailed { .. })));
    }

    #[test]
    fn metric_diagonal_is_positive_on_a_flat_psd() {
        let (tau0, tau3) = chirp_times(2.8, 0.25, 40.0);
        let params = InspiralOracle
            .template_params(tau0, tau3, &config())
            .unwrap();
        let moments = InspiralOracle.noise_moments(&flat_psd(), &params).unwrap();
        let g = InspiralOracle.metric_coeffs(&params, &moments).unwrap();
        assert!(g[0] > 0.0 && g[3] > 0.0 && g[5] > 0.0);
        // 2x2 leading minor of the (tc, tau0) block.
        assert!(g[0] * g[3] - g[1] * g[1] > 0.0);
    }
}
