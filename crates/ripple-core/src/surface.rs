use crate::color::Hsb;
use glam::Vec2;

/// Drawing capability the registry needs from a frontend.
pub trait RippleSurface {
    /// Stroke an unfilled ring centered at `center`. `alpha` is in [0, 1].
    fn stroke_ring(&mut self, center: Vec2, radius: f32, color: Hsb, alpha: f32);
}
