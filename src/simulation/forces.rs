//! Gravitational acceleration for the orbit simulation
//!
//! `GravityField` evaluates the Newtonian pull of one or more fixed point
//! masses on a target position. It holds no state besides `G` and the
//! minimum separation, and is recomputed on every call.

use crate::simulation::error::SimError;
use crate::simulation::states::NVec2;

/// Position and mass of an attracting body, as seen by the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub x: NVec2, // position
    pub m: f64, // mass
}

/// Unsoftened Newtonian gravity.
/// Separations below `min_separation` are reported as
/// [`SimError::SingularSeparation`], and results that overflow (huge `G`
/// or masses) as [`SimError::NonFiniteAcceleration`], instead of returning
/// infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    pub G: f64, // gravitational constant
    pub min_separation: f64, // singularity guard (m)
}

impl GravityField {
    /// Acceleration on a target at `target` due to a mass `m` at `source`.
    /// Points from the target toward the source with magnitude `G m / r^2`
    pub fn acceleration_from(&self, source: NVec2, m: f64, target: NVec2) -> Result<NVec2, SimError> {
        // r points from the target to the source, the direction of the pull
        let r = source - target;

        // Separation |r|
        let dist = r.norm();
        if !(dist >= self.min_separation) {
            return Err(SimError::SingularSeparation {
                distance: dist,
                min: self.min_separation,
            });
        }

        // a = G m r / |r|^3
        // (unit vector r / |r| scaled by G m / |r|^2)
        let inv_r = dist.recip();
        let inv_r3 = inv_r * inv_r * inv_r;

        finite(self.G * m * inv_r3 * r, dist)
    }

    /// Total acceleration on `target` from every source: plain vector sum of
    /// the pairwise inverse-square terms. Fails on the first singular pair
    pub fn superpose(&self, sources: &[PointMass], target: NVec2) -> Result<NVec2, SimError> {
        let total = sources.iter().try_fold(NVec2::zeros(), |acc, s| {
            Ok(acc + self.acceleration_from(s.x, s.m, target)?)
        })?;

        // Finite terms can still overflow when summed
        let nearest = sources
            .iter()
            .map(|s| (s.x - target).norm())
            .fold(f64::INFINITY, f64::min);
        finite(total, nearest)
    }
}

fn finite(a: NVec2, distance: f64) -> Result<NVec2, SimError> {
    if a.x.is_finite() && a.y.is_finite() {
        Ok(a)
    } else {
        Err(SimError::NonFiniteAcceleration { distance })
    }
}
