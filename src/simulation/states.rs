//! Core state types for the orbit simulation.
//!
//! Defines the 2D body and the owned simulation state:
//! - `Body` with a `Role` (Attractor, Orbiter, Probe)
//! - `InitialConditions`, the literal values restored by `reset`
//! - `SimulationState`, the Attractor/Orbiter/optional Probe plus `G`,
//!   elapsed time and the per-body acceleration cache used by Verlet
//!
//! Parameter setters live here since they only touch the state. Stepping,
//! reset and launch are in `integrator`.

use nalgebra::Vector2;

use super::error::SimError;
use super::forces::{GravityField, PointMass};

pub type NVec2 = Vector2<f64>;

/// Default minimum separation (m) below which gravity is treated as singular
pub const DEFAULT_MIN_SEPARATION: f64 = 1.0e3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Attractor,
    Orbiter,
    Probe,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position (m, relative to the attractor)
    pub v: NVec2, // velocity (m/s), zero for the attractor
    pub m: f64, // mass (kg)
    pub role: Role,
}

impl Body {
    pub fn point_mass(&self) -> PointMass {
        PointMass { x: self.x, m: self.m }
    }
}

/// Literal initial conditions a state is created from
#[derive(Debug, Clone, PartialEq)]
pub struct InitialConditions {
    pub orbiter_x: NVec2,
    pub orbiter_v: NVec2,
    pub attractor_m: f64,
    pub orbiter_m: f64,
    pub G: f64,
}

impl InitialConditions {
    pub fn validate(&self) -> Result<(), SimError> {
        positive("G", self.G)?;
        positive("attractor_m", self.attractor_m)?;
        positive("orbiter_m", self.orbiter_m)?;
        Ok(())
    }
}

/// Owned simulation state, advanced in place by the integrator.
///
/// The attractor sits at the origin and is never advanced. `orbiter_a` and
/// `probe_a` hold the acceleration computed at the end of the previous step
/// and are reused as `a_old` by the next one; `None` means "compute fresh".
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub attractor: Body,
    pub orbiter: Body,
    pub probe: Option<Body>,
    pub G: f64, // gravitational constant, operator-editable
    pub t: f64, // elapsed simulated time (s)
    pub min_separation: f64,
    pub degraded: bool, // last step or launch held a cached acceleration
    pub(crate) orbiter_a: Option<NVec2>,
    pub(crate) probe_a: Option<NVec2>,
    pub(crate) initial: InitialConditions,
    pub(crate) restart_v: NVec2,
}

impl SimulationState {
    /// Create a state from literal initial conditions with the default
    /// minimum separation
    pub fn create(
        orbiter_x: NVec2,
        orbiter_v: NVec2,
        attractor_m: f64,
        orbiter_m: f64,
        G: f64,
    ) -> Result<Self, SimError> {
        Self::from_initial(
            InitialConditions { orbiter_x, orbiter_v, attractor_m, orbiter_m, G },
            DEFAULT_MIN_SEPARATION,
        )
    }

    pub fn from_initial(initial: InitialConditions, min_separation: f64) -> Result<Self, SimError> {
        initial.validate()?;
        positive("min_separation", min_separation)?;

        let mut state = Self {
            attractor: Body {
                x: NVec2::zeros(),
                v: NVec2::zeros(),
                m: initial.attractor_m,
                role: Role::Attractor,
            },
            orbiter: Body {
                x: initial.orbiter_x,
                v: initial.orbiter_v,
                m: initial.orbiter_m,
                role: Role::Orbiter,
            },
            probe: None,
            G: initial.G,
            t: 0.0,
            min_separation,
            degraded: false,
            orbiter_a: None,
            probe_a: None,
            restart_v: initial.orbiter_v,
            initial,
        };
        state.orbiter_a = state.orbiter_acceleration().ok();

        log::info!(
            "created state: orbiter at {:.4e} m, speed {:.1} m/s, G = {:.4e}",
            state.orbiter.x.norm(),
            state.orbiter.v.norm(),
            state.G
        );
        Ok(state)
    }

    /// Gravity field for the current `G`
    pub fn field(&self) -> GravityField {
        GravityField {
            G: self.G,
            min_separation: self.min_separation,
        }
    }

    /// Fresh acceleration of the orbiter at its current position
    pub fn orbiter_acceleration(&self) -> Result<NVec2, SimError> {
        self.field().acceleration_from(self.attractor.x, self.attractor.m, self.orbiter.x)
    }

    /// Cached acceleration carried into the next step, if any
    pub fn cached_orbiter_acceleration(&self) -> Option<NVec2> {
        self.orbiter_a
    }

    pub fn cached_probe_acceleration(&self) -> Option<NVec2> {
        self.probe_a
    }

    pub fn initial(&self) -> &InitialConditions {
        &self.initial
    }

    /// Velocity the orbiter gets on the next `restart`
    pub fn restart_velocity(&self) -> NVec2 {
        self.restart_v
    }

    pub fn is_launched(&self) -> bool {
        self.probe.is_some()
    }

    // Setters mutate in place and leave the acceleration cache alone, so
    // a change only shows up in the next step's `a_new`.

    pub fn set_G(&mut self, value: f64) -> Result<(), SimError> {
        positive("G", value)?;
        self.G = value;
        Ok(())
    }

    pub fn set_attractor_mass(&mut self, value: f64) -> Result<(), SimError> {
        positive("attractor_m", value)?;
        self.attractor.m = value;
        Ok(())
    }

    pub fn set_orbiter_mass(&mut self, value: f64) -> Result<(), SimError> {
        positive("orbiter_m", value)?;
        self.orbiter.m = value;
        Ok(())
    }

    /// Change the restart speed by `delta` m/s along the literal initial
    /// velocity direction (+y when the literal velocity is zero)
    pub fn nudge_restart_velocity(&mut self, delta: f64) -> Result<(), SimError> {
        if !delta.is_finite() {
            return Err(SimError::InvalidParameter { name: "velocity_nudge", value: delta });
        }
        let dir = self
            .initial
            .orbiter_v
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(NVec2::y);
        self.restart_v += delta * dir;
        Ok(())
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}
