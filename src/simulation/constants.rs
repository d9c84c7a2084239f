//! Physical constants and the literal Earth/Sun initial conditions
//!
//! All values are SI: meters, kilograms, seconds.

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67430e-11;

/// Sun mass (kg)
pub const SUN_MASS: f64 = 1.989e30;

/// Earth mass (kg)
pub const EARTH_MASS: f64 = 5.972e24;

/// Mean Earth-Sun distance, used to scale the view
pub const AU: f64 = 1.4959787e11;

/// Earth perihelion distance (m)
pub const PERIHELION_DISTANCE: f64 = 1.471e11;

/// Earth speed at perihelion (m/s)
pub const PERIHELION_SPEED: f64 = 30290.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;
pub const SECONDS_PER_YEAR: f64 = 365.0 * SECONDS_PER_DAY;

// Operator controls
pub const DEFAULT_STEP: f64 = SECONDS_PER_HOUR;
pub const STEP_INCREMENT: f64 = 60.0;
pub const MIN_STEP: f64 = 60.0;
pub const VELOCITY_NUDGE: f64 = 100.0; // m/s per keypress
pub const SCALE_UP: f64 = 1.1;
pub const SCALE_DOWN: f64 = 0.9;
pub const PROBE_IMPULSE: [f64; 2] = [0.0, 1000.0]; // m/s
