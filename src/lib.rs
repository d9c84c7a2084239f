pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Role, SimulationState, InitialConditions, NVec2};
pub use simulation::forces::{GravityField, PointMass};
pub use simulation::error::SimError;
pub use simulation::integrator::{step, euler_step, reset, restart, launch_probe, StepStatus};
pub use simulation::report::{report, report_probe, ReportSnapshot, ProbeSnapshot};
pub use simulation::control::{dispatch, Command, Adjust};
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, ParametersConfig, AttractorConfig, OrbiterConfig, ProbeConfig, ViewConfig, ScenarioConfig};

pub use visualization::orbsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_energy_drift_curve};
