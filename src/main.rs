use orbsim::{ScenarioConfig, Scenario};
use orbsim::{report, report_probe, run_2d};
use orbsim::{bench_step, bench_energy_drift_curve};
use orbsim::simulation::report::format_sim_time;

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "earth_sun.yaml")]
    file_name: String,

    /// Step without a window and log reports
    #[arg(long)]
    headless: bool,

    /// Number of steps in headless mode
    #[arg(long, default_value_t = 8760)]
    steps: usize,

    /// Log a report every this many steps in headless mode
    #[arg(long, default_value_t = 720)]
    every: usize,

    /// Print energy drift and step timing benchmarks
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, steps: usize, every: usize) -> Result<()> {
    let every = every.max(1);

    for i in 1..=steps {
        scenario.advance()?;

        if i % every == 0 || i == steps {
            let r = report(&scenario.state);
            log::info!(
                "{}: r = {:.4e} m, |F| = {:.4e} N, KE = {:.6e} J, PE = {:.6e} J, E = {:.9e} J{}",
                format_sim_time(r.t),
                r.distance_to_attractor,
                r.gravitational_force_magnitude,
                r.kinetic_energy,
                r.potential_energy,
                r.total_energy,
                if r.degraded { " (degraded)" } else { "" }
            );
            if let Some(p) = report_probe(&scenario.state) {
                log::info!("  probe: r = {:.4e} m, {:.1} m/s", p.distance_to_attractor, p.speed);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.bench {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        bench_energy_drift_curve()?;
        bench_step()?;
    } else if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        run_headless(scenario, args.steps, args.every)?;
    } else {
        // bevy installs its own logger
        run_2d(scenario);
    }

    Ok(())
}
