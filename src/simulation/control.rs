//! Operator commands and their dispatch onto the core API
//!
//! The presentation layer turns input events into [`Command`]s; `dispatch`
//! maps each one to a single call on the scenario. Keeps the integrator
//! free of any input handling.

use super::error::SimError;
use super::integrator::{launch_probe, reset, restart};
use super::scenario::Scenario;

/// Direction of a paired adjustment command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    IncreaseTimeStep,
    DecreaseTimeStep,
    NudgeInitialVelocity(Adjust),
    ScaleG(Adjust),
    ScaleAttractorMass(Adjust),
    ScaleOrbiterMass(Adjust),
    ZoomIn,
    ZoomOut,
    /// Restart the orbit, keeping edited `G` and masses
    Reset,
    /// Back to the literal initial conditions
    HardReset,
    Launch,
}

/// Apply one command. Errors leave the scenario unchanged.
pub fn dispatch(command: Command, scenario: &mut Scenario) -> Result<(), SimError> {
    log::debug!("dispatch {command:?}");

    let Scenario {
        parameters: p,
        state,
        view,
    } = scenario;

    let factor = |adjust: Adjust| match adjust {
        Adjust::Up => p.scale_up,
        Adjust::Down => p.scale_down,
    };

    match command {
        Command::IncreaseTimeStep => p.h0 += p.h_step,
        Command::DecreaseTimeStep => p.h0 = (p.h0 - p.h_step).max(p.h_min),
        Command::NudgeInitialVelocity(Adjust::Up) => state.nudge_restart_velocity(p.velocity_nudge)?,
        Command::NudgeInitialVelocity(Adjust::Down) => state.nudge_restart_velocity(-p.velocity_nudge)?,
        Command::ScaleG(a) => state.set_G(state.G * factor(a))?,
        Command::ScaleAttractorMass(a) => state.set_attractor_mass(state.attractor.m * factor(a))?,
        Command::ScaleOrbiterMass(a) => state.set_orbiter_mass(state.orbiter.m * factor(a))?,
        Command::ZoomIn => view.meters_per_pixel /= view.zoom_factor,
        Command::ZoomOut => view.meters_per_pixel *= view.zoom_factor,
        Command::Reset => restart(state),
        Command::HardReset => reset(state),
        Command::Launch => launch_probe(state, p.probe_impulse)?,
    }
    Ok(())
}
