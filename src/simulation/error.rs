//! Domain errors surfaced by the simulation core

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    /// A mass, `G` or other strictly positive parameter got a bad value.
    /// The previous value is kept.
    #[error("invalid parameter `{name}`: {value} (must be finite and > 0)")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Gravity evaluated closer than the minimum separation
    #[error("singular separation: {distance:e} m is below the minimum of {min:e} m")]
    SingularSeparation { distance: f64, min: f64 },

    /// Gravity overflowed for the current `G` and masses
    #[error("non-finite acceleration: G m / r^2 overflows at {distance:e} m")]
    NonFiniteAcceleration { distance: f64 },

    #[error("probe already launched")]
    AlreadyLaunched,

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),
}
