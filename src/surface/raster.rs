//! CPU rasterization of a [`Scene`] via `vello_cpu`.

use kurbo::{PathEl, Shape as _, Stroke, StrokeOpts};

use crate::foundation::core::{BezPath, Canvas, Point, Rgba8Premul};
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::surface::scene::{Scene, SceneShape, SceneStyle};

const PATH_TOLERANCE: f64 = 0.1;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// Rasterize the current contents of `scene` onto a `canvas`-sized frame.
///
/// Every primitive is stroked with `style.stroke_width`. Shapes with non-finite geometry are
/// skipped.
#[tracing::instrument(skip(scene, style), fields(shapes = scene.shapes().len()))]
pub fn rasterize_scene(
    scene: &Scene,
    canvas: Canvas,
    style: &SceneStyle,
) -> EpicycleResult<FrameRGBA> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| EpicycleError::surface("canvas width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| EpicycleError::surface("canvas height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(EpicycleError::surface("canvas must be non-empty"));
    }

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    let mut ctx = vello_cpu::RenderContext::new(width, height);

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(to_cpu_color(style.background));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));

    let origin = scene.origin();
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
    let stroke = Stroke::new(style.stroke_width);
    let opts = StrokeOpts::default();

    let mut skipped = 0usize;
    for shape in scene.shapes() {
        let (outline, color) = match shape {
            SceneShape::Circle(c) => {
                if !(is_finite(c.center) && c.radius.is_finite()) || c.radius <= 0.0 {
                    skipped += 1;
                    continue;
                }
                let path = kurbo::Circle::new(c.center, c.radius).to_path(PATH_TOLERANCE);
                (path, style.circle)
            }
            SceneShape::Line(l) => {
                if !(is_finite(l.from) && is_finite(l.to)) {
                    skipped += 1;
                    continue;
                }
                let mut path = BezPath::new();
                path.move_to(l.from);
                path.line_to(l.to);
                (path, style.line_color(l.role))
            }
        };
        let filled = kurbo::stroke(outline.iter(), &stroke, &opts, PATH_TOLERANCE);
        ctx.set_paint(to_cpu_color(color));
        ctx.fill_path(&bezpath_to_cpu(&filled));
    }
    if skipped > 0 {
        tracing::debug!(skipped, "skipped shapes with non-finite geometry");
    }

    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: u32::from(width),
        height: u32::from(height),
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn to_cpu_color(c: Rgba8Premul) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/raster.rs"]
mod tests;
