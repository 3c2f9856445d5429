// Registry pass tests: update/draw/prune ordering and tone ownership.

use glam::Vec2;
use ripple_core::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingSurface {
    rings: Vec<(Vec2, f32, f32)>,
}

impl RippleSurface for RecordingSurface {
    fn stroke_ring(&mut self, center: Vec2, radius: f32, _color: Hsb, alpha: f32) {
        self.rings.push((center, radius, alpha));
    }
}

#[derive(Clone, Default)]
struct ToneProbe {
    active: Rc<Cell<bool>>,
    cancelled: Rc<Cell<bool>>,
}

impl ToneProbe {
    fn playing() -> Self {
        let p = Self::default();
        p.active.set(true);
        p
    }
}

impl ToneHandle for ToneProbe {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn cancel(self) {
        self.cancelled.set(true);
        self.active.set(false);
    }
}

fn ripple_at(x: f32, lifespan: i32) -> Ripple {
    let mut r = Ripple::new(Vec2::new(x, 300.0), Vec2::ZERO, 10.0, STATIC_RIPPLE_COLOR);
    r.lifespan = lifespan;
    r
}

#[test]
fn tick_keeps_exactly_the_survivors_in_order() {
    let mut reg: RippleRegistry<()> = RippleRegistry::new();
    // lifespans of 1 go negative this tick; the others survive
    let lifespans = [1, 100, 1, 1, 50, 255, 1];
    for (i, l) in lifespans.iter().enumerate() {
        reg.spawn(ripple_at(i as f32, *l), None);
    }

    let mut surface = RecordingSurface::default();
    let report = reg.tick(&mut surface);

    assert_eq!(report.drawn, lifespans.len());
    assert_eq!(report.removed, 4);
    let xs: Vec<f32> = reg.iter().map(|r| r.origin.x).collect();
    assert_eq!(xs, vec![1.0, 4.0, 5.0]);
    for r in reg.iter() {
        assert!(!is_done(r));
    }
}

#[test]
fn every_ripple_is_updated_and_drawn_once_per_tick() {
    let mut reg: RippleRegistry<()> = RippleRegistry::new();
    for i in 0..5 {
        reg.spawn(ripple_at(i as f32, if i % 2 == 0 { 1 } else { 200 }), None);
    }
    let mut surface = RecordingSurface::default();
    reg.tick(&mut surface);

    let mut drawn_xs: Vec<f32> = surface.rings.iter().map(|(c, _, _)| c.x).collect();
    // back-to-front pass: newest ripple is drawn first
    assert_eq!(drawn_xs, vec![4.0, 3.0, 2.0, 1.0, 0.0]);
    drawn_xs.sort_by(f32::total_cmp);
    drawn_xs.dedup();
    assert_eq!(drawn_xs.len(), 5, "no ripple may be skipped or drawn twice");
}

#[test]
fn expiring_ripple_is_drawn_transparent_then_removed() {
    let mut reg: RippleRegistry<()> = RippleRegistry::new();
    reg.spawn(ripple_at(0.0, 1), None);
    let mut surface = RecordingSurface::default();
    reg.tick(&mut surface);
    assert_eq!(surface.rings.len(), 1);
    assert_eq!(surface.rings[0].2, 0.0);
    assert!(reg.is_empty());

    reg.tick(&mut surface);
    assert_eq!(surface.rings.len(), 1, "removed ripple must not be drawn again");
}

#[test]
fn fresh_ripple_lives_for_128_ticks() {
    let mut reg: RippleRegistry<()> = RippleRegistry::new();
    reg.spawn(ripple_at(0.0, LIFESPAN_START), None);
    let mut surface = RecordingSurface::default();
    for _ in 0..127 {
        reg.tick(&mut surface);
    }
    assert_eq!(reg.len(), 1);
    reg.tick(&mut surface);
    assert!(reg.is_empty());
    assert_eq!(surface.rings.len(), 128);
}

#[test]
fn removal_cancels_a_still_playing_tone() {
    let mut reg = RippleRegistry::new();
    let probe = ToneProbe::playing();
    reg.spawn(ripple_at(0.0, 1), Some(probe.clone()));
    reg.tick(&mut RecordingSurface::default());
    assert!(reg.is_empty());
    assert!(probe.cancelled.get());
}

#[test]
fn finished_tones_are_released_without_cancel() {
    let mut reg = RippleRegistry::new();
    let probe = ToneProbe::playing();
    reg.spawn(ripple_at(0.0, 200), Some(probe.clone()));

    reg.tick(&mut RecordingSurface::default());
    assert!(reg.entries()[0].has_tone());

    probe.active.set(false);
    reg.tick(&mut RecordingSurface::default());
    assert!(!reg.entries()[0].has_tone());
    assert!(!probe.cancelled.get());
}

#[test]
fn clear_cancels_every_tone() {
    let mut reg = RippleRegistry::new();
    let probes: Vec<ToneProbe> = (0..3).map(|_| ToneProbe::playing()).collect();
    for (i, p) in probes.iter().enumerate() {
        reg.spawn(ripple_at(i as f32, 200), Some(p.clone()));
    }
    reg.clear();
    assert!(reg.is_empty());
    assert!(probes.iter().all(|p| p.cancelled.get()));
}
