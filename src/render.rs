use crate::constants::*;
use glam::Vec2;
use ripple_core::{Hsb, RippleSurface, TRAIL_FADE_ALPHA};
use wasm_bindgen::JsCast;
use web_sys as web;

// ===================== Canvas 2D surface =====================

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    trail_fade_css: String,
}

#[inline]
fn rgba_css(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", rgb[0], rgb[1], rgb[2], alpha)
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let (r, g, b) = TRAIL_FADE_RGB;
        Ok(Self {
            ctx,
            trail_fade_css: rgba_css([r, g, b], TRAIL_FADE_ALPHA),
        })
    }

    /// Paint the whole canvas opaque black.
    pub fn clear(&self, size: Vec2) {
        self.ctx.set_fill_style_str(BACKGROUND_CSS);
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    /// Translucent wash that leaves fading trails behind moving rings.
    pub fn fade(&self, size: Vec2) {
        self.ctx.set_fill_style_str(&self.trail_fade_css);
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    pub fn draw_labels(&self) {
        self.ctx.set_fill_style_str(LABEL_FILL_CSS);
        self.ctx.set_font(LABEL_FONT);
        for (text, x, y) in [SIZE_LABEL, SPEED_LABEL, COLOR_LABEL] {
            _ = self.ctx.fill_text(text, x, y);
        }
    }
}

impl RippleSurface for CanvasSurface {
    fn stroke_ring(&mut self, center: Vec2, radius: f32, color: Hsb, alpha: f32) {
        if alpha <= 0.0 || radius <= 0.0 {
            return;
        }
        let [r, g, b, _] = color.to_rgba8(alpha);
        self.ctx.set_stroke_style_str(&rgba_css([r, g, b], alpha));
        self.ctx.set_line_width(RING_LINE_WIDTH);
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.stroke();
    }
}
