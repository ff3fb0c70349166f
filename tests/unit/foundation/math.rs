use super::*;

#[test]
fn quarter_turn_rotates_x_onto_y() {
    let r = rotate_vec2(Vec2::new(1.0, 0.0), turns_to_radians(0.25));
    assert!(approx_eq_vec2(r, Vec2::new(0.0, 1.0), 1e-12));
}

#[test]
fn rotation_preserves_length() {
    let v = Vec2::new(3.0, -4.0);
    for turns in [0.1, 0.5, -0.3, 2.75] {
        let r = rotate_vec2(v, turns_to_radians(turns));
        assert!((r.hypot() - 5.0).abs() < 1e-12);
    }
}
