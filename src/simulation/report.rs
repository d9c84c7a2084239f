//! Derived physical quantities, read fresh from the current state
//!
//! Nothing here is cached: every call recomputes distance, force and
//! energies from the integrator's own position, velocity, masses and `G`.

use super::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_YEAR};
use super::states::{NVec2, SimulationState};

/// Orbiter quantities at the current instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSnapshot {
    pub distance_to_attractor: f64, // m
    pub gravitational_force_magnitude: f64, // N
    pub acceleration: NVec2, // m/s^2
    pub kinetic_energy: f64, // J
    pub potential_energy: f64, // J
    pub total_energy: f64, // J
    pub position: NVec2,
    pub velocity: NVec2,
    pub t: f64,
    pub degraded: bool,
}

/// Probe quantities at the current instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSnapshot {
    pub distance_to_attractor: f64,
    pub distance_to_orbiter: f64,
    pub speed: f64,
    pub position: NVec2,
}

/// Report on the orbiter.
///
/// KE = 1/2 m |v|^2, PE = -G M m / r, total = KE + PE.
/// When the orbiter sits closer than the minimum separation, or `G` and the
/// masses are large enough to overflow, the report is marked degraded: the
/// acceleration falls back to the cached one, the potential is evaluated at
/// the minimum separation and clamped to the f64 range, so every field
/// stays finite.
pub fn report(state: &SimulationState) -> ReportSnapshot {
    let orbiter = &state.orbiter;
    let attractor = &state.attractor;

    let distance = (orbiter.x - attractor.x).norm();

    let (acceleration, singular) = match state.orbiter_acceleration() {
        Ok(a) => (a, false),
        Err(_) => (state.orbiter_a.unwrap_or_else(NVec2::zeros), true),
    };

    let kinetic_energy = 0.5 * orbiter.m * orbiter.v.norm_squared();
    let raw_potential = -state.G * attractor.m * orbiter.m / distance.max(state.min_separation);
    let potential_energy = raw_potential.clamp(-f64::MAX, f64::MAX);

    ReportSnapshot {
        distance_to_attractor: distance,
        gravitational_force_magnitude: orbiter.m * acceleration.norm(),
        acceleration,
        kinetic_energy,
        potential_energy,
        total_energy: kinetic_energy + potential_energy,
        position: orbiter.x,
        velocity: orbiter.v,
        t: state.t,
        degraded: singular || !raw_potential.is_finite() || state.degraded,
    }
}

/// Report on the probe, `None` until one is launched
pub fn report_probe(state: &SimulationState) -> Option<ProbeSnapshot> {
    state.probe.as_ref().map(|p| ProbeSnapshot {
        distance_to_attractor: (p.x - state.attractor.x).norm(),
        distance_to_orbiter: (p.x - state.orbiter.x).norm(),
        speed: p.v.norm(),
        position: p.x,
    })
}

/// Elapsed time as "Ny Nd Nh": whole years, total elapsed days and hours
/// within the day
pub fn format_sim_time(t: f64) -> String {
    let years = (t / SECONDS_PER_YEAR).floor();
    let days = (t / SECONDS_PER_DAY).floor();
    let hours = ((t % SECONDS_PER_DAY) / SECONDS_PER_HOUR).floor();
    format!("{years}y {days}d {hours}h")
}
