//! Runtime settings owned by the driving loop
//!
//! `Parameters` holds the operator-controlled numerics:
//! - integrator choice and current step size `h0`,
//! - step increment and floor,
//! - scale factors for `G` and masses, restart velocity nudge,
//! - probe launch impulse
//!
//! `View` holds the display scale. Neither is part of `SimulationState`.

use crate::configuration::config::IntegratorConfig;

use super::states::NVec2;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub integrator: IntegratorConfig,
    pub h0: f64, // current step size (s)
    pub h_step: f64, // step change per command (s)
    pub h_min: f64, // step floor (s)
    pub scale_up: f64, // factor for "increase" scaling commands
    pub scale_down: f64, // factor for "decrease" scaling commands
    pub velocity_nudge: f64, // restart speed change (m/s)
    pub probe_impulse: NVec2, // added to orbiter velocity on launch
}

#[derive(Debug, Clone)]
pub struct View {
    pub meters_per_pixel: f64,
    pub zoom_factor: f64,
    pub trail_length: usize,
}

impl View {
    /// Screen-space position (px) of a world position (m)
    pub fn project(&self, x: NVec2) -> (f32, f32) {
        ((x.x / self.meters_per_pixel) as f32, (x.y / self.meters_per_pixel) as f32)
    }
}
