//! Project schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    pub blade: Vec<StationDef>,
    #[serde(default)]
    pub airfoils: Vec<AirfoilDef>,
    #[serde(default)]
    pub solver: SolverDef,
    #[serde(default)]
    pub studies: StudiesDef,
}

/// One blade station, root to tip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationDef {
    pub r_m: f64,
    pub chord_m: f64,
    pub twist_deg: f64,
    pub airfoil: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirfoilDef {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `[alpha_deg, cl, cd]` rows in ascending angle order
    pub polar: Vec<[f64; 3]>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverDef {
    pub air_density_kg_m3: f64,
    pub blade_count: u32,
    pub hub_cutoff_fraction: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub relaxation: f64,
    pub convergence: ConvergenceDef,
    pub parallel: bool,
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            air_density_kg_m3: 1.225,
            blade_count: 3,
            hub_cutoff_fraction: 0.01,
            max_iterations: 100,
            tolerance: 1e-5,
            relaxation: 0.5,
            convergence: ConvergenceDef::Accept,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceDef {
    #[default]
    Accept,
    Reject,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudiesDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveStudyDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<SurfaceStudyDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyStudyDef>,
    /// Operating points whose spanwise distributions are reported
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spanwise: Vec<OperatingPointDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveStudyDef {
    pub schedule: Vec<ScheduleEntryDef>,
    #[serde(default)]
    pub correction: CorrectionDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntryDef {
    pub wind_speed_mps: f64,
    pub pitch_deg: f64,
    pub rpm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_power_kw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_thrust_kn: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CorrectionDef {
    None,
    RatedLimiter {
        #[serde(default = "default_rated_power_kw")]
        rated_power_kw: f64,
        #[serde(default = "default_rated_wind_speed")]
        default_rated_wind_speed_mps: f64,
        #[serde(default = "default_pitch_jump_deg")]
        pitch_jump_deg: f64,
        #[serde(default = "default_derate_margin")]
        derate_margin_mps: f64,
        #[serde(default = "default_derate_factor")]
        derate_factor: f64,
    },
}

impl Default for CorrectionDef {
    fn default() -> Self {
        CorrectionDef::RatedLimiter {
            rated_power_kw: default_rated_power_kw(),
            default_rated_wind_speed_mps: default_rated_wind_speed(),
            pitch_jump_deg: default_pitch_jump_deg(),
            derate_margin_mps: default_derate_margin(),
            derate_factor: default_derate_factor(),
        }
    }
}

fn default_rated_power_kw() -> f64 {
    15_000.0
}

fn default_rated_wind_speed() -> f64 {
    10.0
}

fn default_pitch_jump_deg() -> f64 {
    1.0
}

fn default_derate_margin() -> f64 {
    2.0
}

fn default_derate_factor() -> f64 {
    0.85
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceStudyDef {
    #[serde(default = "default_pitch_sweep")]
    pub pitch_deg: SweepDef,
    #[serde(default = "default_tsr_sweep")]
    pub tsr: SweepDef,
    #[serde(default = "default_reference_wind_speed")]
    pub wind_speed_mps: f64,
}

impl Default for SurfaceStudyDef {
    fn default() -> Self {
        Self {
            pitch_deg: default_pitch_sweep(),
            tsr: default_tsr_sweep(),
            wind_speed_mps: default_reference_wind_speed(),
        }
    }
}

fn default_pitch_sweep() -> SweepDef {
    SweepDef::Linear {
        start: 0.0,
        end: 20.0,
        points: 21,
    }
}

fn default_tsr_sweep() -> SweepDef {
    SweepDef::Linear {
        start: 4.0,
        end: 12.0,
        points: 17,
    }
}

fn default_reference_wind_speed() -> f64 {
    10.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SweepDef {
    Linear { start: f64, end: f64, points: usize },
    Values { values: Vec<f64> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyStudyDef {
    #[serde(default = "default_weibull_scale")]
    pub weibull_scale_mps: f64,
    #[serde(default = "default_weibull_shape")]
    pub weibull_shape: f64,
    /// Falls back to the rated limiter's rated power
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_power_kw: Option<f64>,
}

impl Default for EnergyStudyDef {
    fn default() -> Self {
        Self {
            weibull_scale_mps: default_weibull_scale(),
            weibull_shape: default_weibull_shape(),
            rated_power_kw: None,
        }
    }
}

fn default_weibull_scale() -> f64 {
    8.0
}

fn default_weibull_shape() -> f64 {
    2.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatingPointDef {
    pub wind_speed_mps: f64,
    pub pitch_deg: f64,
    pub rpm: f64,
}
