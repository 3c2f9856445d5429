use glam::Vec2;
use ripple_core::*;

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn static_color_ignores_position() {
    for p in [
        Vec2::ZERO,
        Vec2::new(400.0, 300.0),
        Vec2::new(799.0, 12.0),
        Vec2::new(-50.0, 9000.0),
    ] {
        assert_eq!(ripple_color(p, CANVAS, ColorMode::Static), STATIC_RIPPLE_COLOR);
    }
    assert_eq!(STATIC_RIPPLE_COLOR, Hsb::new(128.0, 204.0, 255.0));
}

#[test]
fn dynamic_color_at_center_is_near_zero() {
    let c = ripple_color(CANVAS * 0.5, CANVAS, ColorMode::Dynamic);
    assert!(c.h < 1.0 && c.s < 1.0);
    assert_eq!(c.b, 255.0);
}

#[test]
fn dynamic_color_wraps_distance() {
    // 300 px right of center wraps to 45; 200 px below stays 200
    let c = ripple_color(Vec2::new(700.0, 500.0), CANVAS, ColorMode::Dynamic);
    assert!((c.h - 45.0).abs() < 1e-4);
    assert!((c.s - 200.0).abs() < 1e-4);

    // symmetric about the center
    let mirrored = ripple_color(Vec2::new(100.0, 100.0), CANVAS, ColorMode::Dynamic);
    assert_eq!(c, mirrored);
}

#[test]
fn dynamic_channels_stay_in_range() {
    for x in (0..2000).step_by(37) {
        for y in (0..1500).step_by(41) {
            let c = ripple_color(Vec2::new(x as f32, y as f32), CANVAS, ColorMode::Dynamic);
            assert!(c.h >= 0.0 && c.h < 255.0);
            assert!(c.s >= 0.0 && c.s < 255.0);
        }
    }
}

#[test]
fn color_mode_toggles_both_ways() {
    assert_eq!(ColorMode::default(), ColorMode::Dynamic);
    assert_eq!(ColorMode::Dynamic.toggled(), ColorMode::Static);
    assert_eq!(ColorMode::Static.toggled(), ColorMode::Dynamic);
}

#[test]
fn hsb_primaries_convert_to_rgb() {
    let close = |a: [f32; 3], b: [f32; 3]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-3);

    assert!(close(Hsb::new(0.0, 255.0, 255.0).to_rgb(), [1.0, 0.0, 0.0]));
    assert!(close(Hsb::new(85.0, 255.0, 255.0).to_rgb(), [0.0, 1.0, 0.0]));
    assert!(close(Hsb::new(170.0, 255.0, 255.0).to_rgb(), [0.0, 0.0, 1.0]));
    assert!(close(Hsb::new(42.0, 0.0, 255.0).to_rgb(), [1.0, 1.0, 1.0]));
    assert!(close(Hsb::new(200.0, 255.0, 0.0).to_rgb(), [0.0, 0.0, 0.0]));
}

#[test]
fn static_ripple_color_is_light_cyan_blue() {
    let [r, g, b] = STATIC_RIPPLE_COLOR.to_rgb();
    assert!(b >= g && g > r, "rgb = {r}, {g}, {b}");
    assert!((b - 1.0).abs() < 1e-6);
}

#[test]
fn rgba8_quantizes_alpha() {
    let px = Hsb::new(0.0, 255.0, 255.0).to_rgba8(0.5);
    assert_eq!(px, [255, 0, 0, 128]);
    let px = Hsb::new(0.0, 255.0, 255.0).to_rgba8(-1.0);
    assert_eq!(px[3], 0);
}
