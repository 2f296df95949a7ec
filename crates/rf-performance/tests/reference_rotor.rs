//! Curve, surface and energy studies on a 120 m three-bladed rotor.

use rf_airfoils::{AirfoilPolar, PolarDatabase};
use rf_core::AirfoilId;
use rf_performance::{
    Execution, NoCorrection, OperationalSchedule, RatedLimiter, SweepDefinition,
    WindDistribution, compute_coefficient_surface, compute_performance_curve,
    rpm_for_tip_speed_ratio,
};
use rf_solver::{BemConfig, BladeGeometry};

const CYLINDER: AirfoilId = AirfoilId::new(1);
const SECTION: AirfoilId = AirfoilId::new(2);
const RADIUS: f64 = 120.0;

fn blade() -> BladeGeometry {
    let n = 30;
    let mut r = Vec::new();
    let mut chord = Vec::new();
    let mut twist = Vec::new();
    let mut airfoil = Vec::new();
    for i in 0..n {
        let x = i as f64 / (n - 1) as f64;
        r.push(3.0 + (RADIUS - 3.0) * x);
        chord.push(5.2 - 4.2 * x);
        twist.push(14.0 * (1.0 - x).powi(2));
        airfoil.push(if x < 0.1 { CYLINDER } else { SECTION });
    }
    BladeGeometry::new(r, chord, twist, airfoil).unwrap()
}

fn polars() -> PolarDatabase {
    let cylinder = AirfoilPolar::new(vec![-180.0, 180.0], vec![0.0, 0.0], vec![0.5, 0.5]).unwrap();

    let alpha: Vec<f64> = (-20..=30).map(f64::from).collect();
    let cl = alpha
        .iter()
        .map(|&a| {
            if a <= 12.0 {
                0.35 + 0.105 * a
            } else {
                0.35 + 0.105 * 12.0 - 0.04 * (a - 12.0)
            }
        })
        .collect();
    let cd = alpha.iter().map(|&a| 0.008 + 0.00015 * a * a).collect();
    let section = AirfoilPolar::new(alpha, cl, cd).unwrap();

    [(CYLINDER, cylinder), (SECTION, section)]
        .into_iter()
        .collect()
}

/// Variable speed up to 7.5 rpm, pitch to feather from 12 m/s.
fn schedule() -> OperationalSchedule {
    let wind: Vec<f64> = (4..=20).map(f64::from).collect();
    let pitch = wind
        .iter()
        .map(|&v| if v <= 11.0 { 0.0 } else { 2.0 + 1.5 * (v - 12.0) })
        .collect();
    let rpm = wind
        .iter()
        .map(|&v| rpm_for_tip_speed_ratio(9.0, v, RADIUS).min(7.5))
        .collect();
    OperationalSchedule::new(wind, pitch, rpm).unwrap()
}

#[test]
fn power_curve_below_and_above_rated() {
    let curve = compute_performance_curve(
        &blade(),
        &schedule(),
        &polars(),
        &BemConfig::default(),
        &RatedLimiter::default(),
        Execution::Parallel,
    )
    .unwrap();

    assert_eq!(curve.len(), 17);
    assert_eq!(curve.rated_wind_speed, Some(12.0));
    assert_eq!(curve.unconverged_count(), 0);

    // 4..=11 m/s at fixed pitch
    for w in curve.power_kw[..8].windows(2) {
        assert!(w[1] > w[0], "power not increasing: {:?}", curve.power_kw);
    }
    assert!((curve.power_kw[0] - 628.0).abs() < 5.0, "{}", curve.power_kw[0]);
    assert!((curve.power_kw[7] - 12_583.0).abs() < 50.0, "{}", curve.power_kw[7]);

    for (i, &v) in curve.wind_speed.iter().enumerate() {
        if v > 12.0 {
            assert!(curve.power_kw[i] <= 15_000.0);
        }
        if v > 14.0 {
            let expected = curve.raw_thrust_kn[i] * 0.85 * 12.0 / v;
            assert!((curve.thrust_kn[i] - expected).abs() < 1e-9);
        } else {
            assert_eq!(curve.thrust_kn[i], curve.raw_thrust_kn[i]);
        }
    }
    // the limiter actually bites: raw power exceeds rated at 14 m/s
    assert!(curve.raw_power_kw[10] > 15_000.0);
    assert_eq!(curve.power_kw[10], 15_000.0);
}

#[test]
fn uncorrected_curve_keeps_raw_values() {
    let curve = compute_performance_curve(
        &blade(),
        &schedule(),
        &polars(),
        &BemConfig::default(),
        &NoCorrection,
        Execution::Serial,
    )
    .unwrap();
    assert_eq!(curve.rated_wind_speed, None);
    assert_eq!(curve.power_kw, curve.raw_power_kw);
    assert!(curve.max_power_kw() > 16_000.0);
}

#[test]
fn surface_is_positive_and_peaks_at_zero_pitch() {
    let pitch = SweepDefinition::default_pitch().points().unwrap();
    let tsr = SweepDefinition::default_tip_speed_ratio().points().unwrap();
    let surface = compute_coefficient_surface(
        &blade(),
        &polars(),
        &pitch,
        &tsr,
        10.0,
        &BemConfig::default(),
        Execution::Parallel,
    )
    .unwrap();

    assert_eq!(surface.shape(), (17, 21));
    assert_eq!(surface.tsr_grid[(3, 5)], tsr[3]);
    assert_eq!(surface.pitch_grid[(3, 5)], pitch[5]);
    assert!(surface.cp.iter().all(|&cp| cp >= 0.0));
    assert!(surface.ct.iter().all(|&ct| ct >= 0.0));

    let peak = surface.peak_cp().unwrap();
    assert_eq!(peak.pitch_deg, 0.0);
    assert_eq!(peak.tsr, 12.0);
    assert!((peak.cp - 0.417).abs() < 2e-3, "peak Cp {}", peak.cp);
    // below the Betz limit
    assert!(peak.cp < 16.0 / 27.0);
}

#[test]
fn surface_serial_matches_parallel() {
    let pitch = [-2.0, 0.0, 4.0, 10.0];
    let tsr = [5.0, 8.0, 11.0];
    let run = |execution| {
        compute_coefficient_surface(
            &blade(),
            &polars(),
            &pitch,
            &tsr,
            10.0,
            &BemConfig::default(),
            execution,
        )
        .unwrap()
    };
    assert_eq!(run(Execution::Serial), run(Execution::Parallel));
}

#[test]
fn annual_energy_of_corrected_curve() {
    let curve = compute_performance_curve(
        &blade(),
        &schedule(),
        &polars(),
        &BemConfig::default(),
        &RatedLimiter::default(),
        Execution::Parallel,
    )
    .unwrap();
    let energy = curve
        .annual_energy(&WindDistribution::default(), 15_000.0)
        .unwrap();
    assert!(
        (energy.aep_mwh - 51_855.0).abs() < 0.01 * 51_855.0,
        "AEP {} MWh",
        energy.aep_mwh
    );
    assert!((energy.capacity_factor - 0.3946).abs() < 0.005);
    assert!((energy.aep_gwh * 1000.0 - energy.aep_mwh).abs() < 1e-9);
}
