use std::time::Instant;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::constants::SECONDS_PER_YEAR;
use crate::simulation::error::SimError;
use crate::simulation::integrator::{euler_step, launch_probe, step};
use crate::simulation::report::report;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, SimulationState};

/// Earth/Sun state from the built-in scenario
fn make_state() -> Result<SimulationState, SimError> {
    Ok(Scenario::build_scenario(ScenarioConfig::earth_sun())?.state)
}

/// Time a Verlet step with and without the probe
pub fn bench_step() -> Result<(), SimError> {
    let steps = 1_000_000;

    let mut two_body = make_state()?;
    let mut three_body = make_state()?;
    launch_probe(&mut three_body, NVec2::new(0.0, 1000.0))?;

    // Warm up
    step(&mut two_body, 60.0)?;
    step(&mut three_body, 60.0)?;

    let t0 = Instant::now();
    for _ in 0..steps {
        step(&mut two_body, 60.0)?;
    }
    let two_ns = t0.elapsed().as_secs_f64() * 1e9 / steps as f64;

    let t1 = Instant::now();
    for _ in 0..steps {
        step(&mut three_body, 60.0)?;
    }
    let three_ns = t1.elapsed().as_secs_f64() * 1e9 / steps as f64;

    println!("verlet step: two bodies = {two_ns:8.2} ns, with probe = {three_ns:8.2} ns");
    Ok(())
}

/// Relative total-energy drift after one simulated year, Verlet vs Euler,
/// over a range of step sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_energy_drift_curve() -> Result<(), SimError> {
    println!("dt_s,verlet_drift,euler_drift");

    for dt in (600..=14400).step_by(600) {
        let dt = dt as f64;
        let steps = (SECONDS_PER_YEAR / dt).round() as usize;

        let mut verlet = make_state()?;
        let mut euler = make_state()?;
        let e0 = report(&verlet).total_energy;

        for _ in 0..steps {
            step(&mut verlet, dt)?;
            euler_step(&mut euler, dt)?;
        }

        let drift = |s: &SimulationState| ((report(s).total_energy - e0) / e0).abs();
        println!("{},{:.6e},{:.6e}", dt, drift(&verlet), drift(&euler));
    }
    Ok(())
}
