//! Rotation of epicycle radius-vectors.
//!
//! Time is measured in periods: `t = 1` is one full turn at angular speed 1.

use crate::foundation::core::Vec2;
use crate::foundation::math::{rotate_vec2, turns_to_radians};

/// Displacement of a vector's endpoint after rotating for `delta_t` periods.
///
/// `offset` is the vector's current `end - start`. The rotation angle is
/// `2π · speed · delta_t`; the result is `rotated - offset`, to be added to the endpoint by the
/// caller. Calls are incremental: each one rotates whatever offset the vector has now.
#[inline]
pub fn rotation_displacement(offset: Vec2, speed: i64, delta_t: f64) -> Vec2 {
    rotate_vec2(offset, turns_to_radians(speed as f64 * delta_t)) - offset
}

/// Absolute offset of a vector that started at `initial` after `t` periods at `speed`.
///
/// Closed-form counterpart of repeatedly applying [`rotation_displacement`].
#[inline]
pub fn rotate_offset(initial: Vec2, speed: i64, t: f64) -> Vec2 {
    rotate_vec2(initial, turns_to_radians(speed as f64 * t))
}

#[cfg(test)]
#[path = "../../tests/unit/motion/rotate.rs"]
mod tests;
