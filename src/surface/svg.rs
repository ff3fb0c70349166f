use std::fmt::Write as _;

use crate::foundation::core::{BezPath, Canvas, Point};
use crate::surface::LineRole;
use crate::surface::scene::{Scene, SceneShape, SceneStyle};

impl Scene {
    /// Serialize the current scene as a standalone SVG document.
    ///
    /// Circles and vectors become `<circle>`/`<line>` elements; all trace segments are joined
    /// into a single `<path>`.
    pub fn to_svg(&self, canvas: Canvas, style: &SceneStyle) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = canvas.width,
            h = canvas.height,
        );
        let _ = writeln!(
            out,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            style.background.to_hex_rgb()
        );

        for shape in self.shapes() {
            match shape {
                SceneShape::Circle(c) => {
                    let center = self.to_surface(c.center);
                    let _ = writeln!(
                        out,
                        r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                        center.x,
                        center.y,
                        c.radius,
                        style.circle.to_hex_rgb(),
                        style.stroke_width
                    );
                }
                SceneShape::Line(l) if l.role == LineRole::Vector => {
                    let from = self.to_surface(l.from);
                    let to = self.to_surface(l.to);
                    let _ = writeln!(
                        out,
                        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                        from.x,
                        from.y,
                        to.x,
                        to.y,
                        style.vector.to_hex_rgb(),
                        style.stroke_width
                    );
                }
                SceneShape::Line(_) => {}
            }
        }

        let trace = self.trace_path();
        if !trace.elements().is_empty() {
            let _ = writeln!(
                out,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                trace.to_svg(),
                style.trace.to_hex_rgb(),
                style.stroke_width
            );
        }
        out.push_str("</svg>\n");
        out
    }

    /// Trace segments joined into one path in surface space.
    ///
    /// Consecutive segments that share an endpoint continue the current subpath.
    pub fn trace_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut pen: Option<Point> = None;
        for (from, to) in self.trace_segments() {
            let (from, to) = (self.to_surface(from), self.to_surface(to));
            if pen != Some(from) {
                path.move_to(from);
            }
            path.line_to(to);
            pen = Some(to);
        }
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/svg.rs"]
mod tests;
