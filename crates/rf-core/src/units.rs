// rf-core/src/units.rs

use uom::si::f64::{
    AngularVelocity as UomAngularVelocity, Area as UomArea, Force as UomForce,
    Length as UomLength, Power as UomPower, Torque as UomTorque, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type AngularVelocity = UomAngularVelocity;
pub type Area = UomArea;
pub type Force = UomForce;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Torque = UomTorque;
pub type Velocity = UomVelocity;

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn rpm(v: f64) -> AngularVelocity {
    use uom::si::angular_velocity::revolution_per_minute;
    AngularVelocity::new::<revolution_per_minute>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn newtons(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn newton_meters(v: f64) -> Torque {
    use uom::si::torque::newton_meter;
    Torque::new::<newton_meter>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

/// Rotor speed in rev/min to angular velocity in rad/s.
#[inline]
pub fn rpm_to_rad_per_s(rpm: f64) -> f64 {
    rpm * 2.0 * core::f64::consts::PI / 60.0
}

/// Angular velocity in rad/s to rotor speed in rev/min.
#[inline]
pub fn rad_per_s_to_rpm(omega: f64) -> f64 {
    omega * 60.0 / (2.0 * core::f64::consts::PI)
}

pub mod constants {
    /// Sea-level standard air density.
    pub const AIR_DENSITY_KG_M3: f64 = 1.225;

    /// Hours in a non-leap year, used for annual energy.
    pub const HOURS_PER_YEAR: f64 = 8760.0;
}
