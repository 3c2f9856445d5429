// Drag gate and spawning tests.

use glam::Vec2;
use ripple_core::*;

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn idle_gate_never_spawns() {
    let mut sp = Spawner::default();
    let s = RippleSettings::default();
    for i in 0..10 {
        let p = Vec2::new(100.0 + i as f32 * 10.0, 400.0);
        assert!(sp.frame(p, &s, CANVAS).is_none());
    }
    assert_eq!(sp.gate(), DragGate::Idle);
}

#[test]
fn press_outside_reserved_strip_starts_dragging() {
    let mut sp = Spawner::default();
    sp.pointer_pressed(Vec2::new(100.0, 300.0));
    assert_eq!(sp.gate(), DragGate::Dragging);
    sp.pointer_released();
    assert_eq!(sp.gate(), DragGate::Idle);
}

#[test]
fn press_inside_reserved_strip_is_ignored() {
    let mut sp = Spawner::default();
    sp.pointer_pressed(Vec2::new(100.0, 140.0)); // boundary belongs to the controls
    assert_eq!(sp.gate(), DragGate::Idle);
    sp.pointer_pressed(Vec2::new(100.0, 10.0));
    assert_eq!(sp.gate(), DragGate::Idle);
}

#[test]
fn release_is_unconditional() {
    let mut sp = Spawner::default();
    sp.pointer_pressed(Vec2::new(100.0, 300.0));
    sp.pointer_released();
    sp.pointer_released();
    assert_eq!(sp.gate(), DragGate::Idle);
}

#[test]
fn continuous_drag_spawns_one_ripple_per_frame() {
    let mut sp = Spawner::default();
    let s = RippleSettings::default();
    let start = Vec2::new(200.0, 300.0);
    sp.frame(start, &s, CANVAS);
    sp.pointer_pressed(start);

    let mut spawned = 0;
    for i in 1..=20 {
        let p = start + Vec2::new(i as f32 * 5.0, 0.0);
        if sp.frame(p, &s, CANVAS).is_some() {
            spawned += 1;
        }
    }
    assert_eq!(spawned, 20);
}

#[test]
fn stationary_pointer_while_dragging_spawns_static_rings() {
    let mut sp = Spawner::default();
    let s = RippleSettings::default();
    let p = Vec2::new(300.0, 300.0);
    sp.frame(p, &s, CANVAS);
    sp.pointer_pressed(p);
    let r = sp.frame(p, &s, CANVAS).expect("dragging outside the strip");
    assert_eq!(r.growth, 0.0);
    assert_eq!(r.radius, s.size());
}

#[test]
fn delta_is_measured_from_previous_frame() {
    let mut sp = Spawner::default();
    let s = RippleSettings::new(10.0, 0.5, ColorMode::Static).unwrap();
    sp.frame(Vec2::new(100.0, 140.0), &s, CANVAS);
    sp.pointer_pressed(Vec2::new(100.0, 150.0));

    let r = sp
        .frame(Vec2::new(150.0, 190.0), &s, CANVAS)
        .expect("one ripple");
    assert_eq!(r.origin, Vec2::new(150.0, 190.0));
    assert!((r.growth - (5000.0_f32).sqrt() * 0.5).abs() < 1e-3);
    assert_eq!(r.color, STATIC_RIPPLE_COLOR);
}

#[test]
fn pointer_inside_strip_during_drag_emits_nothing() {
    let mut sp = Spawner::default();
    let s = RippleSettings::default();
    sp.pointer_pressed(Vec2::new(50.0, 400.0));
    for i in 0..30 {
        let p = Vec2::new(50.0 + i as f32, 20.0 + (i % 5) as f32 * 20.0);
        assert!(sp.frame(p, &s, CANVAS).is_none(), "frame {i} spawned in strip");
    }
    assert_eq!(sp.gate(), DragGate::Dragging);
}

#[test]
fn leaving_strip_resumes_spawning_with_full_delta() {
    let mut sp = Spawner::default();
    let s = RippleSettings::new(10.0, 1.0, ColorMode::Dynamic).unwrap();
    sp.pointer_pressed(Vec2::new(50.0, 400.0));
    assert!(sp.frame(Vec2::new(50.0, 100.0), &s, CANVAS).is_none());
    let r = sp
        .frame(Vec2::new(50.0, 160.0), &s, CANVAS)
        .expect("back outside the strip");
    assert!((r.growth - 60.0).abs() < 1e-4);
}

#[test]
fn first_frame_has_zero_delta() {
    let mut sp = Spawner::default();
    let s = RippleSettings::default();
    sp.pointer_pressed(Vec2::new(400.0, 400.0));
    let r = sp.frame(Vec2::new(420.0, 430.0), &s, CANVAS).unwrap();
    assert_eq!(r.growth, 0.0);
}

#[test]
fn custom_reserved_region() {
    let mut sp = Spawner::new(ReservedRegion { height: 0.0 });
    sp.pointer_pressed(Vec2::new(10.0, 5.0));
    assert_eq!(sp.gate(), DragGate::Dragging);
    assert!(!sp.region().contains(Vec2::new(10.0, 5.0)));
}
