use super::*;
use crate::foundation::core::Vec2;
use crate::surface::{DrawingSurface, LineRole};

fn canvas() -> Canvas {
    Canvas {
        width: 64,
        height: 64,
    }
}

#[test]
fn empty_scene_is_background_only() {
    let frame = rasterize_scene(&Scene::new(), canvas(), &SceneStyle::default()).unwrap();
    assert_eq!(frame.width, 64);
    assert_eq!(frame.data.len(), 64 * 64 * 4);
    assert_eq!(frame.pixel(10, 10), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(64, 0), None);
}

#[test]
fn trace_line_is_painted_through_origin_offset() {
    let mut scene = Scene::new();
    scene.set_origin(Vec2::new(32.0, 32.0));
    scene.line(
        Point::new(-20.0, 0.5),
        Point::new(20.0, 0.5),
        LineRole::Trace,
    );
    let style = SceneStyle {
        stroke_width: 3.0,
        ..SceneStyle::default()
    };
    let frame = rasterize_scene(&scene, canvas(), &style).unwrap();
    let [r, g, b, _] = frame.pixel(32, 32).unwrap();
    assert!(r > 200 && g < 60 && b < 60, "expected red, got {r},{g},{b}");
    assert_eq!(frame.pixel(32, 5), Some([255, 255, 255, 255]));
}

#[test]
fn non_finite_shapes_are_skipped() {
    let mut scene = Scene::new();
    scene.circle(Point::new(f64::NAN, 0.0), 4.0);
    scene.line(Point::ZERO, Point::new(f64::NAN, 1.0), LineRole::Vector);
    let frame = rasterize_scene(&scene, canvas(), &SceneStyle::default()).unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn oversized_canvas_is_rejected() {
    let big = Canvas {
        width: 70_000,
        height: 10,
    };
    assert!(rasterize_scene(&Scene::new(), big, &SceneStyle::default()).is_err());
}
