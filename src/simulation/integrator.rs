//! Fixed-step time integrators for the orbit simulation
//!
//! Provides the velocity-Verlet `step` that drives the simulation, the
//! explicit-Euler baseline used as a comparison, and the lifecycle
//! operations that touch the acceleration cache (`reset`, `restart`,
//! `launch_probe`).

use super::error::SimError;
use super::states::{Body, NVec2, Role, SimulationState};

/// Mass given to a launched probe (kg). The probe attracts nothing, so this
/// only matters for reporting
pub const PROBE_MASS: f64 = 1.0e3;

/// Outcome of a successful step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Nominal,
    /// At least one body hit a singular separation or an overflowing
    /// acceleration and kept its cached acceleration for this step
    Degraded,
}

/// Advance the state by one step `dt` using velocity-Verlet.
///
/// The orbiter is pulled by the attractor only. The probe, if launched, is
/// pulled by the attractor and the orbiter: its `a_old` was evaluated
/// against the pre-step orbiter position and its `a_new` uses the
/// post-step one. Each body's `a_new` is cached as the next step's `a_old`.
pub fn step(state: &mut SimulationState, dt: f64) -> Result<StepStatus, SimError> {
    check_dt(dt)?;

    let field = state.field();
    let attractor = state.attractor.point_mass();
    let orbiter_before = state.orbiter.point_mass();
    let mut degraded = false;

    // a_n for the orbiter: cached from the last step, fresh after euler
    let a_old = match state.orbiter_a {
        Some(a) => a,
        None => hold(field.superpose(&[attractor], state.orbiter.x), NVec2::zeros(), &mut degraded),
    };
    let a_new = verlet(&mut state.orbiter, a_old, dt, &mut degraded, |x| {
        field.superpose(&[attractor], x)
    });
    state.orbiter_a = Some(a_new);

    if let Some(probe) = state.probe.as_mut() {
        let orbiter_after = state.orbiter.point_mass();

        let a_old = match state.probe_a {
            Some(a) => a,
            None => hold(
                field.superpose(&[attractor, orbiter_before], probe.x),
                NVec2::zeros(),
                &mut degraded,
            ),
        };
        let a_new = verlet(probe, a_old, dt, &mut degraded, |x| {
            field.superpose(&[attractor, orbiter_after], x)
        });
        state.probe_a = Some(a_new);
    }

    state.t += dt;
    state.degraded = degraded;

    if degraded {
        log::warn!("degraded step at t = {:.0} s: holding cached acceleration", state.t);
        Ok(StepStatus::Degraded)
    } else {
        Ok(StepStatus::Nominal)
    }
}

/// Advance the state by one step `dt` using explicit (forward) Euler.
///
/// Both updates use the pre-step state, so energy is not conserved and
/// grows every orbit. Clears the Verlet acceleration cache.
pub fn euler_step(state: &mut SimulationState, dt: f64) -> Result<StepStatus, SimError> {
    check_dt(dt)?;

    let field = state.field();
    let attractor = state.attractor.point_mass();
    let orbiter_before = state.orbiter.point_mass();
    let mut degraded = false;

    let a = hold(field.superpose(&[attractor], orbiter_before.x), NVec2::zeros(), &mut degraded);
    let orbiter = &mut state.orbiter;
    orbiter.x += dt * orbiter.v;
    orbiter.v += dt * a;

    if let Some(probe) = state.probe.as_mut() {
        let a = hold(
            field.superpose(&[attractor, orbiter_before], probe.x),
            NVec2::zeros(),
            &mut degraded,
        );
        probe.x += dt * probe.v;
        probe.v += dt * a;
    }

    state.orbiter_a = None;
    state.probe_a = None;
    state.t += dt;
    state.degraded = degraded;

    Ok(if degraded { StepStatus::Degraded } else { StepStatus::Nominal })
}

/// Restore the literal initial conditions: position, velocity, masses and
/// `G`. Discards the probe, zeroes time and recomputes `a_old`.
pub fn reset(state: &mut SimulationState) {
    let init = state.initial.clone();

    state.G = init.G;
    state.attractor.m = init.attractor_m;
    state.orbiter.m = init.orbiter_m;
    state.restart_v = init.orbiter_v;

    rewind(state, init.orbiter_x, init.orbiter_v);
    log::info!("hard reset to initial conditions");
}

/// Restart the orbit from the initial position with the operator-edited
/// restart velocity, keeping the current `G` and masses
pub fn restart(state: &mut SimulationState) {
    let x = state.initial.orbiter_x;
    let v = state.restart_v;

    rewind(state, x, v);
    log::info!("restart with speed {:.1} m/s", v.norm());
}

fn rewind(state: &mut SimulationState, x: NVec2, v: NVec2) {
    state.orbiter.x = x;
    state.orbiter.v = v;
    state.probe = None;
    state.probe_a = None;
    state.t = 0.0;
    state.degraded = false;
    state.orbiter_a = state.orbiter_acceleration().ok();
}

/// Launch the probe from the orbiter's current position, with the
/// orbiter's velocity plus `impulse`. Only one probe per run.
///
/// The probe starts on top of the orbiter, so the orbiter's pull is
/// singular at launch. In that case the cache is seeded with the orbiter's
/// own acceleration and the state is marked degraded.
pub fn launch_probe(state: &mut SimulationState, impulse: NVec2) -> Result<(), SimError> {
    if state.probe.is_some() {
        return Err(SimError::AlreadyLaunched);
    }
    if !(impulse.x.is_finite() && impulse.y.is_finite()) {
        return Err(SimError::InvalidParameter {
            name: "impulse",
            value: impulse.norm(),
        });
    }

    let probe = Body {
        x: state.orbiter.x,
        v: state.orbiter.v + impulse,
        m: PROBE_MASS,
        role: Role::Probe,
    };

    let sources = [state.attractor.point_mass(), state.orbiter.point_mass()];
    let fallback = state
        .orbiter_a
        .or_else(|| state.orbiter_acceleration().ok())
        .unwrap_or_else(NVec2::zeros);
    let mut degraded = false;
    state.probe_a = Some(hold(state.field().superpose(&sources, probe.x), fallback, &mut degraded));
    state.degraded |= degraded;

    log::info!(
        "probe launched at t = {:.0} s with impulse ({:.1}, {:.1}) m/s",
        state.t,
        impulse.x,
        impulse.y
    );
    state.probe = Some(probe);
    Ok(())
}

/// One velocity-Verlet update of `body`, returning `a_new`
fn verlet<F>(body: &mut Body, a_old: NVec2, dt: f64, degraded: &mut bool, accel: F) -> NVec2
where
    F: Fn(NVec2) -> Result<NVec2, SimError>,
{
    // Drift: x_n+1 = x_n + v_n dt + 1/2 a_n dt^2
    body.x += dt * body.v + (0.5 * dt * dt) * a_old;

    // a_n+1 from x_n+1, held at a_n when singular
    let a_new = hold(accel(body.x), a_old, degraded);

    // Kick: v_n+1 = v_n + 1/2 (a_n + a_n+1) dt
    body.v += (0.5 * dt) * (a_old + a_new);

    a_new
}

/// Unwrap an acceleration, falling back to `cached` on a singular
/// separation or an overflow
fn hold(result: Result<NVec2, SimError>, cached: NVec2, degraded: &mut bool) -> NVec2 {
    match result {
        Ok(a) => a,
        Err(e) => {
            log::debug!("{e}");
            *degraded = true;
            cached
        }
    }
}

fn check_dt(dt: f64) -> Result<(), SimError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimError::NonPositiveTimeStep(dt))
    }
}
