//! HSB colors in the 0..=255 channel space the ripples are specified in.

use crate::constants::{CHANNEL_MAX, DYNAMIC_CHANNEL_WRAP, STATIC_RIPPLE_HSB};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
}

impl Hsb {
    pub const fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b }
    }

    /// Convert to RGB in [0, 1]. No gamma handling: surfaces draw in display
    /// space.
    pub fn to_rgb(self) -> [f32; 3] {
        let h = (self.h / CHANNEL_MAX).rem_euclid(1.0) * 6.0;
        let s = (self.s / CHANNEL_MAX).clamp(0.0, 1.0);
        let v = (self.b / CHANNEL_MAX).clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match sector as u32 % 6 {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        }
    }

    pub fn to_rgba8(self, alpha: f32) -> [u8; 4] {
        let [r, g, b] = self.to_rgb();
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(alpha)]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Dynamic,
    Static,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Dynamic => ColorMode::Static,
            ColorMode::Static => ColorMode::Dynamic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Dynamic => "dynamic",
            ColorMode::Static => "static",
        }
    }
}

pub const STATIC_RIPPLE_COLOR: Hsb = Hsb::new(
    STATIC_RIPPLE_HSB[0],
    STATIC_RIPPLE_HSB[1],
    STATIC_RIPPLE_HSB[2],
);

/// Color for a ripple born at `origin` on a canvas of `canvas` size.
///
/// Dynamic mode wraps the distance from the canvas center into the hue and
/// saturation channels, so rings near the center come out white.
pub fn ripple_color(origin: Vec2, canvas: Vec2, mode: ColorMode) -> Hsb {
    match mode {
        ColorMode::Dynamic => {
            let d = (origin - canvas * 0.5).abs();
            Hsb::new(
                d.x % DYNAMIC_CHANNEL_WRAP,
                d.y % DYNAMIC_CHANNEL_WRAP,
                CHANNEL_MAX,
            )
        }
        ColorMode::Static => STATIC_RIPPLE_COLOR,
    }
}
