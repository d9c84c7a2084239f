//! Build a fully-initialized orbit scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - operator-controlled numerics (`Parameters`)
//! - the simulation state (`SimulationState` at t = 0)
//! - the display scale (`View`)
//!
//! The scenario is inserted into Bevy as a `Resource` and driven by the
//! viewer systems, or stepped directly in headless mode

use bevy::prelude::Resource;

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::integrator::{euler_step, step, StepStatus};
use crate::simulation::params::{Parameters, View};
use crate::simulation::states::{positive, InitialConditions, NVec2, SimulationState};

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub state: SimulationState,
    pub view: View,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p_cfg = cfg.parameters;

        // Operator numerics must all be usable before anything runs
        positive("h0", p_cfg.h0)?;
        positive("h_step", p_cfg.h_step)?;
        positive("h_min", p_cfg.h_min)?;
        positive("scale_up", p_cfg.scale_up)?;
        positive("scale_down", p_cfg.scale_down)?;
        positive("velocity_nudge", p_cfg.velocity_nudge)?;
        positive("meters_per_pixel", cfg.view.meters_per_pixel)?;
        positive("zoom_factor", cfg.view.zoom_factor)?;

        // Initial conditions: orbiter relative to the attractor at the origin
        let initial = InitialConditions {
            orbiter_x: NVec2::new(cfg.orbiter.x[0], cfg.orbiter.x[1]),
            orbiter_v: NVec2::new(cfg.orbiter.v[0], cfg.orbiter.v[1]),
            attractor_m: cfg.attractor.m,
            orbiter_m: cfg.orbiter.m,
            G: p_cfg.G,
        };
        let state = SimulationState::from_initial(initial, p_cfg.min_separation)?;

        let parameters = Parameters {
            integrator: p_cfg.integrator,
            h0: p_cfg.h0.max(p_cfg.h_min),
            h_step: p_cfg.h_step,
            h_min: p_cfg.h_min,
            scale_up: p_cfg.scale_up,
            scale_down: p_cfg.scale_down,
            velocity_nudge: p_cfg.velocity_nudge,
            probe_impulse: NVec2::new(cfg.probe.impulse[0], cfg.probe.impulse[1]),
        };

        let view = View {
            meters_per_pixel: cfg.view.meters_per_pixel,
            zoom_factor: cfg.view.zoom_factor,
            trail_length: cfg.view.trail_length,
        };

        Ok(Self {
            parameters,
            state,
            view,
        })
    }

    /// Advance one step of the current size with the configured integrator
    pub fn advance(&mut self) -> Result<StepStatus, SimError> {
        let dt = self.parameters.h0;
        match self.parameters.integrator {
            IntegratorConfig::Verlet => step(&mut self.state, dt),
            IntegratorConfig::Euler => euler_step(&mut self.state, dt),
        }
    }
}
