//! Epicycle chain construction and per-frame position updates.

use crate::coeffs::parse::Coefficient;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::motion::rotate::{rotate_offset, rotation_displacement};
use crate::surface::{DrawingSurface, LineRole, ShapeId};

/// Default cap on the number of epicycles in a chain.
pub const MAX_EPICYCLES: usize = 500;

/// Signed frequency assigned to chain index `i`.
///
/// Zigzag order over DFT bins: `0, +1, -1, +2, -2, ...`.
pub fn angular_speed(index: usize) -> i64 {
    let i = index as i64;
    if i % 2 == 1 { (i + 1) / 2 } else { -(i / 2) }
}

/// Surface handles of one epicycle's circle and radius-vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpicycleShapes {
    /// Circle primitive.
    pub circle: ShapeId,
    /// Vector primitive.
    pub vector: ShapeId,
}

/// One rotating circle of the chain together with its radius-vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Epicycle {
    coefficient: Coefficient,
    radius: f64,
    speed: i64,
    center: Point,
    tip: Point,
    shapes: Option<EpicycleShapes>,
}

impl Epicycle {
    fn new(index: usize, coefficient: Coefficient, center: Point) -> Self {
        Self {
            coefficient,
            radius: coefficient.magnitude(),
            speed: angular_speed(index),
            center,
            tip: center + coefficient.as_vec2(),
            shapes: None,
        }
    }

    /// Source coefficient.
    pub fn coefficient(&self) -> Coefficient {
        self.coefficient
    }

    /// Circle radius, `|coefficient|`.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed angular speed in turns per period.
    pub fn angular_speed(&self) -> i64 {
        self.speed
    }

    /// Current circle center, which is also the vector's start point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Current vector endpoint.
    pub fn tip(&self) -> Point {
        self.tip
    }

    /// Current radius-vector `tip - center`.
    pub fn offset(&self) -> Vec2 {
        self.tip - self.center
    }

    /// Surface handles, once mounted.
    pub fn shapes(&self) -> Option<EpicycleShapes> {
        self.shapes
    }

    /// Advance this epicycle by `delta_t` periods.
    ///
    /// `inherited` is the translation accumulated by all earlier epicycles this frame. The
    /// circle and vector start move by `inherited`; the tip moves by `inherited` plus this
    /// epicycle's own rotation. Returns the translation to hand to the next epicycle.
    pub fn update_position<S: DrawingSurface + ?Sized>(
        &mut self,
        inherited: Vec2,
        delta_t: f64,
        surface: &mut S,
    ) -> EpicycleResult<Vec2> {
        let own = rotation_displacement(self.offset(), self.speed, delta_t);
        let shift = inherited + own;
        self.center += inherited;
        self.tip += shift;

        if let Some(shapes) = self.shapes {
            surface.move_circle(shapes.circle, self.center)?;
            surface.move_line(shapes.vector, self.center, self.tip)?;
        }
        Ok(shift)
    }
}

/// Ordered chain of epicycles built from a coefficient sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpicycleChain {
    epicycles: Vec<Epicycle>,
    truncated: usize,
}

impl EpicycleChain {
    /// Build a chain from `coefficients`, keeping at most `max` of them.
    ///
    /// Circle `i` is centered on the sum of coefficients `0..i` and its vector points to that
    /// center plus coefficient `i`. Coefficients past `max` are dropped and counted in
    /// [`EpicycleChain::truncated`].
    #[tracing::instrument(skip(coefficients), fields(count = coefficients.len()))]
    pub fn build(coefficients: &[Coefficient], max: usize) -> EpicycleResult<Self> {
        if max == 0 {
            return Err(EpicycleError::validation("max epicycles must be > 0"));
        }

        let kept = coefficients.len().min(max);
        let truncated = coefficients.len() - kept;
        if truncated > 0 {
            tracing::warn!(truncated, max, "dropping coefficients past the epicycle cap");
        }

        let mut epicycles = Vec::with_capacity(kept);
        let mut center = Point::ZERO;
        for (i, &c) in coefficients[..kept].iter().enumerate() {
            let e = Epicycle::new(i, c, center);
            center = e.tip;
            epicycles.push(e);
        }
        tracing::debug!(epicycles = epicycles.len(), "built epicycle chain");

        Ok(Self {
            epicycles,
            truncated,
        })
    }

    /// Number of epicycles.
    pub fn len(&self) -> usize {
        self.epicycles.len()
    }

    /// `true` when the chain has no epicycles.
    pub fn is_empty(&self) -> bool {
        self.epicycles.is_empty()
    }

    /// Number of input coefficients dropped by the cap.
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    /// Epicycles in chain order.
    pub fn epicycles(&self) -> &[Epicycle] {
        &self.epicycles
    }

    pub(crate) fn epicycles_mut(&mut self) -> &mut [Epicycle] {
        &mut self.epicycles
    }

    /// Current endpoint of the last vector, or the origin for an empty chain.
    pub fn tip(&self) -> Point {
        self.epicycles.last().map_or(Point::ZERO, Epicycle::tip)
    }

    /// Exact endpoint of the partial Fourier sum at normalized time `t`.
    ///
    /// Computed from the source coefficients, independent of the chain's current positions.
    pub fn sample_at(&self, t: f64) -> Point {
        let mut p = Point::ZERO;
        for e in &self.epicycles {
            p += rotate_offset(e.coefficient.as_vec2(), e.speed, t);
        }
        p
    }

    /// Create a circle and a vector primitive on `surface` for every epicycle.
    ///
    /// Mounting again replaces the previous handles with fresh primitives.
    pub fn mount<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        for e in &mut self.epicycles {
            let circle = surface.circle(e.center, e.radius);
            let vector = surface.line(e.center, e.tip, LineRole::Vector);
            e.shapes = Some(EpicycleShapes { circle, vector });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/builder.rs"]
mod tests;
