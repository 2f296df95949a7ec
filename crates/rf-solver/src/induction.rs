//! Per-station induction iteration.
//!
//! Each station is solved independently. A pass computes the inflow angle
//! from the current induction estimate, evaluates the section coefficients
//! and the momentum-balance targets, and blends the targets into the
//! estimate with under-relaxation. The station is converged when both
//! targets are within tolerance of the current estimate.

use crate::config::BemConfig;
use rf_airfoils::AirfoilPolar;
use std::f64::consts::PI;

/// Below this, `sin φ` is treated as zero in the tip-loss exponent.
const SIN_PHI_EPS: f64 = 1e-6;
/// Normal/tangential coefficients at or below this produce no induction.
const LOAD_THRESHOLD: f64 = 0.01;
/// `sin φ` or `cos φ` below this suppresses tangential induction.
const TRIG_THRESHOLD: f64 = 0.01;

/// Axial (`a`) and tangential (`a'`) induction factors at one station.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Induction {
    pub axial: f64,
    pub tangential: f64,
}

/// How a station's iteration ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StationStatus {
    /// Inside the hub cutoff; carries no load.
    Skipped,
    /// Converged on pass `iterations`.
    Converged { iterations: usize },
    /// Ran out of passes; the last relaxed estimate was kept.
    IterationCap,
    /// Ran out of passes at zero tip-loss factor, so it carries no load.
    ///
    /// At `r = R` the axial target jumps between the cap and zero as the
    /// normal coefficient crosses the load threshold, and the relaxed estimate
    /// can cycle around it indefinitely.
    Unloaded,
}

impl StationStatus {
    /// False only for a capped station that still carries load.
    pub fn is_converged(&self) -> bool {
        !matches!(self, StationStatus::IterationCap)
    }

    /// Passes spent on the station.
    pub fn passes(&self, max_iterations: usize) -> usize {
        match self {
            StationStatus::Skipped => 0,
            StationStatus::Converged { iterations } => *iterations,
            StationStatus::IterationCap | StationStatus::Unloaded => max_iterations,
        }
    }
}

/// Prandtl tip-loss factor for `blades` blades at radius `r` on a rotor of
/// tip radius `radius`, with inflow angle `phi` in radians.
///
/// Returns `degenerate` when `sin φ` is numerically zero.
pub fn prandtl_tip_loss(blades: u32, radius: f64, r: f64, phi: f64, degenerate: f64) -> f64 {
    let s = phi.sin();
    if s.abs() < SIN_PHI_EPS {
        return degenerate;
    }
    let f = 0.5 * blades as f64 * (radius - r) / (r * s);
    2.0 / PI * (-f).exp().min(1.0).acos()
}

/// Inflow angle `φ = atan2((1-a)·v0, (1+a')·ω·r)` in radians.
#[inline]
pub fn flow_angle(induction: Induction, wind_speed: f64, omega: f64, r: f64) -> f64 {
    ((1.0 - induction.axial) * wind_speed).atan2((1.0 + induction.tangential) * omega * r)
}

/// Everything fixed for one station during its iteration.
pub(crate) struct Station<'a> {
    pub r: f64,
    pub twist_deg: f64,
    pub solidity: f64,
    pub polar: Option<&'a AirfoilPolar>,
}

/// Rotor-level quantities shared by all stations of one solve.
pub(crate) struct Rotor<'a> {
    pub config: &'a BemConfig,
    pub tip_radius: f64,
    pub wind_speed: f64,
    pub omega: f64,
    pub pitch_deg: f64,
}

impl Rotor<'_> {
    pub fn tip_loss(&self, r: f64, phi: f64) -> f64 {
        prandtl_tip_loss(
            self.config.blade_count,
            self.tip_radius,
            r,
            phi,
            self.config.degenerate_tip_loss,
        )
    }

    /// Momentum-balance targets for the current estimate.
    fn targets(&self, station: &Station<'_>, current: Induction) -> Induction {
        let phi = flow_angle(current, self.wind_speed, self.omega, station.r);
        let f = self.tip_loss(station.r, phi);
        let alpha = phi.to_degrees() - (self.pitch_deg + station.twist_deg);

        let (cl, cd) = station
            .polar
            .map_or(self.config.fallback_coefficients, |p| p.coefficients(alpha));

        let (s, c) = phi.sin_cos();
        let cn = cl * c + cd * s;
        let ct = cl * s - cd * c;

        let axial = if cn <= LOAD_THRESHOLD {
            0.0
        } else {
            (1.0 / (4.0 * f * s * s / (station.solidity * cn) + 1.0)).min(self.config.axial_cap)
        };

        let tangential = if ct <= LOAD_THRESHOLD || s < TRIG_THRESHOLD || c < TRIG_THRESHOLD {
            0.0
        } else {
            let term = 4.0 * f * s * c / (station.solidity * ct);
            if term <= 1.0 { 0.0 } else { 1.0 / (term - 1.0) }
        };

        Induction { axial, tangential }
    }

    /// Iterate one station from zero induction.
    pub fn iterate(&self, station: &Station<'_>) -> (Induction, StationStatus) {
        let cfg = self.config;
        let w = cfg.relaxation;
        let mut current = Induction::default();

        for pass in 1..=cfg.max_iterations {
            let target = self.targets(station, current);
            if (target.axial - current.axial).abs() < cfg.tolerance
                && (target.tangential - current.tangential).abs() < cfg.tolerance
            {
                return (current, StationStatus::Converged { iterations: pass });
            }
            current = Induction {
                axial: (w * current.axial + (1.0 - w) * target.axial)
                    .clamp(cfg.axial_bounds.0, cfg.axial_bounds.1),
                tangential: (w * current.tangential + (1.0 - w) * target.tangential)
                    .clamp(cfg.tangential_bounds.0, cfg.tangential_bounds.1),
            };
        }

        (current, StationStatus::IterationCap)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn induction_stays_in_bounds(
            r in 2.0_f64..59.0,
            chord in 0.2_f64..6.0,
            twist in -5.0_f64..25.0,
            pitch in -5.0_f64..30.0,
            wind in 3.0_f64..25.0,
            omega in 0.0_f64..2.5,
        ) {
            let polar = AirfoilPolar::new(
                vec![-20.0, 0.0, 12.0, 30.0],
                vec![-1.75, 0.35, 1.61, 0.89],
                vec![0.068, 0.008, 0.0296, 0.143],
            ).unwrap();
            let config = BemConfig::default();
            let rotor = Rotor { config: &config, tip_radius: 60.0, wind_speed: wind, omega, pitch_deg: pitch };
            let station = Station {
                r,
                twist_deg: twist,
                solidity: 3.0 * chord / (2.0 * PI * r),
                polar: Some(&polar),
            };
            let (ind, _) = rotor.iterate(&station);
            prop_assert!(ind.axial.is_finite() && ind.tangential.is_finite());
            prop_assert!((0.0..=0.5).contains(&ind.axial));
            prop_assert!((-0.5..=0.5).contains(&ind.tangential));
        }
    }
}
