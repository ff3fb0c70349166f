//! Drawing surface seam.
//!
//! Playback never owns pixels or shapes: it creates primitives on a [`DrawingSurface`] and then
//! moves them in place every frame. Shapes are addressed by opaque [`ShapeId`] handles.

pub(crate) mod raster;
pub(crate) mod scene;
pub(crate) mod svg;

use crate::foundation::core::{FrameIndex, Point, Vec2};
use crate::foundation::error::EpicycleResult;

/// Handle to a primitive created on a [`DrawingSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ShapeId(pub usize);

/// What a line primitive represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    /// Radius-vector of one epicycle.
    Vector,
    /// One segment of the traced path.
    Trace,
}

/// Retained-mode drawing target for playback.
///
/// Coordinates are in chain space; the surface maps them to its own space through the origin
/// offset set with [`DrawingSurface::set_origin`].
pub trait DrawingSurface {
    /// Place the chain-space origin at `origin` in surface space.
    fn set_origin(&mut self, origin: Vec2);

    /// Create a circle primitive.
    fn circle(&mut self, center: Point, radius: f64) -> ShapeId;

    /// Create a line primitive.
    fn line(&mut self, from: Point, to: Point, role: LineRole) -> ShapeId;

    /// Move an existing circle to a new center. Radius is fixed at creation.
    fn move_circle(&mut self, id: ShapeId, center: Point) -> EpicycleResult<()>;

    /// Move both endpoints of an existing line.
    fn move_line(&mut self, id: ShapeId, from: Point, to: Point) -> EpicycleResult<()>;

    /// Called once after all mutations of a frame.
    fn present(&mut self, _frame: FrameIndex) -> EpicycleResult<()> {
        Ok(())
    }
}
