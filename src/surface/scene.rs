use crate::foundation::core::{FrameIndex, Point, Rgba8Premul, Vec2};
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::surface::{DrawingSurface, LineRole, ShapeId};

/// Circle stored in a [`Scene`], in chain space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCircle {
    /// Current center.
    pub center: Point,
    /// Radius, fixed at creation.
    pub radius: f64,
}

/// Line stored in a [`Scene`], in chain space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLine {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// What the line draws.
    pub role: LineRole,
}

/// A primitive held by a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneShape {
    /// Epicycle circle.
    Circle(SceneCircle),
    /// Vector or trace segment.
    Line(SceneLine),
}

/// In-memory retained drawing surface.
///
/// Shapes are kept in creation order; a [`ShapeId`] is the index into that order. The scene
/// also counts mutations and presented frames so callers can observe when playback stops
/// touching it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    origin: Vec2,
    shapes: Vec<SceneShape>,
    mutations: u64,
    presented: u64,
    last_presented: Option<FrameIndex>,
}

impl Scene {
    /// Create an empty scene with origin `(0, 0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current origin offset (chain space → surface space).
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Map a chain-space point to surface space.
    pub fn to_surface(&self, p: Point) -> Point {
        p + self.origin
    }

    /// All shapes in creation order.
    pub fn shapes(&self) -> &[SceneShape] {
        &self.shapes
    }

    /// Look up a circle by id.
    pub fn circle_at(&self, id: ShapeId) -> Option<&SceneCircle> {
        match self.shapes.get(id.0) {
            Some(SceneShape::Circle(c)) => Some(c),
            _ => None,
        }
    }

    /// Look up a line by id.
    pub fn line_at(&self, id: ShapeId) -> Option<&SceneLine> {
        match self.shapes.get(id.0) {
            Some(SceneShape::Line(l)) => Some(l),
            _ => None,
        }
    }

    /// Iterate over circles.
    pub fn circles(&self) -> impl Iterator<Item = &SceneCircle> {
        self.shapes.iter().filter_map(|s| match s {
            SceneShape::Circle(c) => Some(c),
            SceneShape::Line(_) => None,
        })
    }

    /// Iterate over lines with the given role.
    pub fn lines(&self, role: LineRole) -> impl Iterator<Item = &SceneLine> {
        self.shapes.iter().filter_map(move |s| match s {
            SceneShape::Line(l) if l.role == role => Some(l),
            _ => None,
        })
    }

    /// Trace segments in the order they were appended.
    pub fn trace_segments(&self) -> Vec<(Point, Point)> {
        self.lines(LineRole::Trace).map(|l| (l.from, l.to)).collect()
    }

    /// Number of create/move calls received so far.
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// Number of frames presented so far.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Index of the last presented frame.
    pub fn last_presented(&self) -> Option<FrameIndex> {
        self.last_presented
    }

    fn push(&mut self, shape: SceneShape) -> ShapeId {
        self.mutations += 1;
        self.shapes.push(shape);
        ShapeId(self.shapes.len() - 1)
    }
}

impl DrawingSurface for Scene {
    fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    fn circle(&mut self, center: Point, radius: f64) -> ShapeId {
        self.push(SceneShape::Circle(SceneCircle { center, radius }))
    }

    fn line(&mut self, from: Point, to: Point, role: LineRole) -> ShapeId {
        self.push(SceneShape::Line(SceneLine { from, to, role }))
    }

    fn move_circle(&mut self, id: ShapeId, center: Point) -> EpicycleResult<()> {
        match self.shapes.get_mut(id.0) {
            Some(SceneShape::Circle(c)) => {
                c.center = center;
                self.mutations += 1;
                Ok(())
            }
            _ => Err(EpicycleError::surface(format!("{id:?} is not a circle"))),
        }
    }

    fn move_line(&mut self, id: ShapeId, from: Point, to: Point) -> EpicycleResult<()> {
        match self.shapes.get_mut(id.0) {
            Some(SceneShape::Line(l)) => {
                l.from = from;
                l.to = to;
                self.mutations += 1;
                Ok(())
            }
            _ => Err(EpicycleError::surface(format!("{id:?} is not a line"))),
        }
    }

    fn present(&mut self, frame: FrameIndex) -> EpicycleResult<()> {
        self.presented += 1;
        self.last_presented = Some(frame);
        Ok(())
    }
}

/// Fixed colors and stroke width used when exporting a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    /// Canvas background.
    pub background: Rgba8Premul,
    /// Epicycle circles.
    pub circle: Rgba8Premul,
    /// Radius-vectors.
    pub vector: Rgba8Premul,
    /// Traced path.
    pub trace: Rgba8Premul,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: Rgba8Premul::from_straight_rgba(255, 255, 255, 255),
            circle: Rgba8Premul::from_straight_rgba(160, 160, 160, 255),
            vector: Rgba8Premul::from_straight_rgba(0, 0, 255, 255),
            trace: Rgba8Premul::from_straight_rgba(255, 0, 0, 255),
            stroke_width: 1.0,
        }
    }
}

impl SceneStyle {
    pub(crate) fn line_color(&self, role: LineRole) -> Rgba8Premul {
        match role {
            LineRole::Vector => self.vector,
            LineRole::Trace => self.trace,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/scene.rs"]
mod tests;
