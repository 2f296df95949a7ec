//! Rotor loads for one operating point.

use crate::config::{BemConfig, ConvergencePolicy};
use crate::error::{SolverError, SolverResult};
use crate::geometry::BladeGeometry;
use crate::induction::{Induction, Rotor, Station, StationStatus, flow_angle};
use crate::operating::OperatingPoint;
use rf_airfoils::PolarDatabase;
use rf_core::timing::{Timer, bem_timing};
use rf_core::units::{Force, Power, Torque, newton_meters, newtons, watts};
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Thrust and torque contributions of one station (N, N·m).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementLoads {
    pub d_thrust: f64,
    pub d_torque: f64,
}

/// Converged state and integrated loads of one operating point.
#[derive(Clone, Debug, PartialEq)]
pub struct BemSolution {
    /// Rotor thrust (N)
    pub thrust_n: f64,
    /// Aerodynamic torque (N·m)
    pub torque_nm: f64,
    /// Shaft power `torque · ω` (W)
    pub power_w: f64,
    /// Final induction per station, zero inside the hub cutoff
    pub induction: Vec<Induction>,
    pub elements: Vec<ElementLoads>,
    pub stations: Vec<StationStatus>,
}

impl BemSolution {
    pub fn thrust(&self) -> Force {
        newtons(self.thrust_n)
    }

    pub fn torque(&self) -> Torque {
        newton_meters(self.torque_nm)
    }

    pub fn power(&self) -> Power {
        watts(self.power_w)
    }

    pub fn axial_induction(&self) -> impl Iterator<Item = f64> + '_ {
        self.induction.iter().map(|i| i.axial)
    }

    pub fn tangential_induction(&self) -> impl Iterator<Item = f64> + '_ {
        self.induction.iter().map(|i| i.tangential)
    }

    /// True when no loaded station hit the iteration cap.
    ///
    /// [`StationStatus::Unloaded`] stations count as converged since their
    /// element loads are zero whatever the induction estimate.
    pub fn converged(&self) -> bool {
        self.stations.iter().all(StationStatus::is_converged)
    }

    /// Indices of loaded stations that hit the iteration cap.
    pub fn unconverged_stations(&self) -> impl Iterator<Item = usize> + '_ {
        self.stations
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_converged())
            .map(|(i, _)| i)
    }
}

/// Solve the induction field of `blade` at `op` and integrate rotor loads.
///
/// Stations inside the hub cutoff are skipped. A station that references an
/// airfoil missing from `polars` uses the configured fallback coefficients.
///
/// A capped station whose final tip-loss factor is zero is reported as
/// [`StationStatus::Unloaded`] rather than [`StationStatus::IterationCap`].
///
/// # Errors
/// Returns [`SolverError::Config`] for an invalid configuration and, under
/// [`ConvergencePolicy::Reject`], [`SolverError::ConvergenceFailed`] for the
/// first loaded station that hit the iteration cap.
pub fn solve(
    blade: &BladeGeometry,
    op: &OperatingPoint,
    polars: &PolarDatabase,
    config: &BemConfig,
) -> SolverResult<BemSolution> {
    config.validate()?;
    let timer = Timer::start();

    let tip_radius = blade.tip_radius();
    let v0 = op.wind_speed();
    let omega = op.omega();
    let rotor = Rotor {
        config,
        tip_radius,
        wind_speed: v0,
        omega,
        pitch_deg: op.pitch_deg(),
    };
    let cutoff = config.hub_cutoff_fraction * tip_radius;

    let n = blade.len();
    let mut induction = vec![Induction::default(); n];
    let mut stations = vec![StationStatus::Skipped; n];

    for (i, bs) in blade.stations().enumerate() {
        if bs.r < cutoff {
            continue;
        }
        let polar = polars.get(bs.airfoil);
        if polar.is_none() {
            trace!(station = i, airfoil = %bs.airfoil, "no polar, using fallback coefficients");
        }
        let station = Station {
            r: bs.r,
            twist_deg: bs.twist_deg,
            solidity: blade.solidity(i, config.blade_count),
            polar,
        };
        let (ind, mut status) = rotor.iterate(&station);
        if status == StationStatus::IterationCap
            && rotor.tip_loss(bs.r, flow_angle(ind, v0, omega, bs.r)) == 0.0
        {
            trace!(station = i, r = bs.r, "capped station has zero tip loss");
            status = StationStatus::Unloaded;
        }
        if status == StationStatus::IterationCap {
            debug!(
                station = i,
                r = bs.r,
                axial = ind.axial,
                tangential = ind.tangential,
                "induction iteration hit the cap"
            );
            if config.convergence == ConvergencePolicy::Reject {
                return Err(SolverError::ConvergenceFailed {
                    station: i,
                    r: bs.r,
                    iterations: config.max_iterations,
                });
            }
        }
        induction[i] = ind;
        stations[i] = status;
    }

    let rho = config.air_density;
    let dr = blade.spacing();
    let elements: Vec<ElementLoads> = blade
        .stations()
        .enumerate()
        .map(|(i, bs)| {
            if stations[i] == StationStatus::Skipped {
                return ElementLoads::default();
            }
            let Induction {
                axial: a,
                tangential: ap,
            } = induction[i];
            let r = bs.r;
            let f = rotor.tip_loss(r, flow_angle(induction[i], v0, omega, r));
            ElementLoads {
                d_thrust: 4.0 * PI * r * rho * v0 * v0 * a * (1.0 - a) * f * dr[i],
                d_torque: 4.0 * PI * r.powi(3) * rho * v0 * omega * ap * (1.0 - a) * f * dr[i],
            }
        })
        .collect();

    let thrust: f64 = elements.iter().map(|e| e.d_thrust).sum();
    let torque: f64 = elements.iter().map(|e| e.d_torque).sum();
    let power = torque * omega;

    if timer.is_enabled() {
        let passes: usize = stations
            .iter()
            .map(|s| s.passes(config.max_iterations))
            .sum();
        bem_timing::STATION_PASSES.add(passes as u64);
    }
    timer.stop_into(&bem_timing::SOLVE_CALLS);

    trace!(
        wind_speed = v0,
        pitch = op.pitch_deg(),
        rpm = op.rpm(),
        thrust_n = thrust,
        power_w = power,
        "operating point solved"
    );

    Ok(BemSolution {
        thrust_n: thrust,
        torque_nm: torque,
        power_w: power,
        induction,
        elements,
        stations,
    })
}
