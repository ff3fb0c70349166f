use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_interval_matches_nominal_rate() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_interval_ms() - 1000.0 / 60.0).abs() < 1e-12);
    assert_eq!(fps.frame_interval(), Duration::from_secs_f64(1.0 / 60.0));

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.as_f64() - 29.97).abs() < 1e-3);
}

#[test]
fn canvas_center_is_half_extent() {
    let c = Canvas {
        width: 1000,
        height: 600,
    };
    assert_eq!(c.center(), Vec2::new(500.0, 300.0));
}

#[test]
fn premul_and_hex() {
    let c = Rgba8Premul::from_straight_rgba(255, 0, 0, 255);
    assert_eq!(c.to_hex_rgb(), "#ff0000");
    let half = Rgba8Premul::from_straight_rgba(255, 255, 255, 128);
    assert_eq!(half.r, 128);
    assert_eq!(FrameIndex(4).next(), FrameIndex(5));
}
