//! A single expanding, fading ring.
//!
//! `Ripple` is plain data; the lifecycle lives in the free functions below so
//! the registry and tests can drive it without any surface or audio attached.

use crate::color::{ripple_color, Hsb};
use crate::config::RippleSettings;
use crate::constants::{CHANNEL_MAX, LIFESPAN_DECAY_PER_TICK, LIFESPAN_START};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec2,
    /// Radius added per tick, fixed at creation.
    pub growth: f32,
    pub initial_radius: f32,
    pub radius: f32,
    pub color: Hsb,
    pub lifespan: i32,
}

impl Ripple {
    pub fn new(origin: Vec2, velocity: Vec2, size: f32, color: Hsb) -> Self {
        Self {
            origin,
            growth: velocity.length(),
            initial_radius: size,
            radius: size,
            color,
            lifespan: LIFESPAN_START,
        }
    }
}

/// Build a ripple from a drag delta, reading size, speed and color mode from
/// `settings` exactly once.
pub fn spawn_ripple(origin: Vec2, delta: Vec2, settings: &RippleSettings, canvas: Vec2) -> Ripple {
    let velocity = delta * settings.speed();
    let color = ripple_color(origin, canvas, settings.color_mode);
    Ripple::new(origin, velocity, settings.size(), color)
}

#[inline]
pub fn advance(ripple: &mut Ripple) {
    ripple.radius += ripple.growth;
    ripple.lifespan -= LIFESPAN_DECAY_PER_TICK;
}

#[inline]
pub fn is_done(ripple: &Ripple) -> bool {
    ripple.lifespan < 0
}

/// Stroke alpha in [0, 1]; the fade is driven directly by the lifespan.
#[inline]
pub fn stroke_alpha(ripple: &Ripple) -> f32 {
    (ripple.lifespan as f32 / CHANNEL_MAX).clamp(0.0, 1.0)
}
