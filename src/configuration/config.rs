//! Configuration types for loading orbit scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – integrator choice, physical constant and operator step sizes
//! - [`AttractorConfig`]  – mass of the fixed central body
//! - [`OrbiterConfig`]    – initial state of the orbiting body
//! - [`ProbeConfig`]      – launch impulse for the optional probe
//! - [`ViewConfig`]       – display scale for the viewer
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   integrator: "verlet"     # or "euler"
//!   G: 6.6743e-11            # gravitational constant
//!   h0: 3600.0               # initial step size (s)
//!   h_step: 60.0             # step change per keypress (s)
//!   h_min: 60.0              # smallest allowed step (s)
//!   min_separation: 1.0e3    # singularity guard (m)
//!   velocity_nudge: 100.0    # restart speed change per keypress (m/s)
//!
//! attractor:
//!   m: 1.989e30
//!
//! orbiter:
//!   x: [ 1.471e11, 0.0 ]
//!   v: [ 0.0, 30290.0 ]
//!   m: 5.972e24
//!
//! probe:
//!   impulse: [ 0.0, 1000.0 ]
//!
//! view:
//!   meters_per_pixel: 2.4932978e8
//!   zoom_factor: 1.1
//!   trail_length: 100
//! ```
//!
//! `probe`, `view` and the scale factors are optional.

use serde::Deserialize;

use crate::simulation::constants;

/// Which integrator the driving loop uses
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "verlet")] // Velocity Verlet, symplectic, bounded energy error
    #[default]
    Verlet,

    #[serde(rename = "euler")] // Explicit Euler, energy drifts every orbit
    Euler,
}

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig,
    pub G: f64, // gravitational constant
    pub h0: f64, // initial step size
    pub h_step: f64, // step change per command
    pub h_min: f64, // smallest step
    pub min_separation: f64, // singular separation threshold
    #[serde(default = "default_scale_up")]
    pub scale_up: f64,
    #[serde(default = "default_scale_down")]
    pub scale_down: f64,
    #[serde(default = "default_velocity_nudge")]
    pub velocity_nudge: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AttractorConfig {
    pub m: f64, // mass of the central body, fixed at the origin
}

#[derive(Deserialize, Debug, Clone)]
pub struct OrbiterConfig {
    pub x: [f64; 2], // initial position relative to the attractor
    pub v: [f64; 2], // initial velocity
    pub m: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProbeConfig {
    pub impulse: [f64; 2], // velocity added to the orbiter's on launch
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            impulse: constants::PROBE_IMPULSE,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ViewConfig {
    pub meters_per_pixel: f64,
    pub zoom_factor: f64,
    pub trail_length: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            // one AU spans 600 px
            meters_per_pixel: constants::AU / 600.0,
            zoom_factor: 1.1,
            trail_length: 100,
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub attractor: AttractorConfig,
    pub orbiter: OrbiterConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl ScenarioConfig {
    /// Earth around the Sun, starting at perihelion
    pub fn earth_sun() -> Self {
        Self {
            parameters: ParametersConfig {
                integrator: IntegratorConfig::Verlet,
                G: constants::G,
                h0: constants::DEFAULT_STEP,
                h_step: constants::STEP_INCREMENT,
                h_min: constants::MIN_STEP,
                min_separation: crate::simulation::states::DEFAULT_MIN_SEPARATION,
                scale_up: constants::SCALE_UP,
                scale_down: constants::SCALE_DOWN,
                velocity_nudge: constants::VELOCITY_NUDGE,
            },
            attractor: AttractorConfig {
                m: constants::SUN_MASS,
            },
            orbiter: OrbiterConfig {
                x: [constants::PERIHELION_DISTANCE, 0.0],
                v: [0.0, constants::PERIHELION_SPEED],
                m: constants::EARTH_MASS,
            },
            probe: ProbeConfig::default(),
            view: ViewConfig::default(),
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}

fn default_scale_up() -> f64 {
    constants::SCALE_UP
}

fn default_scale_down() -> f64 {
    constants::SCALE_DOWN
}

fn default_velocity_nudge() -> f64 {
    constants::VELOCITY_NUDGE
}
