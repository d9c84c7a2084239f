pub mod states;
pub mod params;
pub mod error;
pub mod constants;
pub mod forces;
pub mod integrator;
pub mod report;
pub mod control;
pub mod scenario;
