use std::f64::consts::TAU;

use crate::foundation::core::Vec2;

/// Convert a number of full turns into radians.
#[inline]
pub(crate) fn turns_to_radians(turns: f64) -> f64 {
    TAU * turns
}

/// Apply the 2D rotation matrix for `theta` radians to `v`.
#[inline]
pub(crate) fn rotate_vec2(v: Vec2, theta: f64) -> Vec2 {
    let (sn, cs) = theta.sin_cos();
    Vec2::new(v.x * cs - v.y * sn, v.x * sn + v.y * cs)
}

#[cfg(test)]
pub(crate) fn approx_eq_vec2(a: Vec2, b: Vec2, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
