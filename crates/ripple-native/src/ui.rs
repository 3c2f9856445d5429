//! On-canvas controls for the native window: two sliders and the color-mode
//! button, laid out inside the reserved top strip.

use crate::gpu::ShapeInstance;
use glam::Vec2;
use ripple_core::{ColorMode, RippleSettings, SliderSpec, SIZE_SLIDER, SPEED_SLIDER};

const SIZE_SLIDER_POS: Vec2 = Vec2::new(20.0, 35.0);
const SPEED_SLIDER_POS: Vec2 = Vec2::new(20.0, 75.0);
const SLIDER_SIZE: Vec2 = Vec2::new(140.0, 20.0);
const TRACK_HEIGHT: f32 = 4.0;
const KNOB_RADIUS: f32 = 7.0;
const COLOR_BUTTON_POS: Vec2 = Vec2::new(20.0, 120.0);
const COLOR_BUTTON_SIZE: Vec2 = Vec2::new(110.0, 20.0);

const TRACK_COLOR: [f32; 4] = [0.35, 0.35, 0.35, 1.0];
const FILL_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
const BUTTON_STATIC_COLOR: [f32; 4] = [0.2, 0.6, 1.0, 1.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SliderId {
    Size,
    Speed,
}

#[derive(Clone, Copy, Debug)]
struct Rect {
    min: Vec2,
    size: Vec2,
}

impl Rect {
    fn contains(&self, p: Vec2) -> bool {
        let max = self.min + self.size;
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

#[derive(Clone, Copy, Debug)]
struct SliderWidget {
    id: SliderId,
    spec: SliderSpec,
    rect: Rect,
}

impl SliderWidget {
    fn value_at(&self, p: Vec2) -> f32 {
        self.spec
            .from_fraction((p.x - self.rect.min.x) / self.rect.size.x)
    }

    fn read(&self, settings: &RippleSettings) -> f32 {
        match self.id {
            SliderId::Size => settings.size(),
            SliderId::Speed => settings.speed(),
        }
    }

    fn write(&self, settings: &mut RippleSettings, value: f32) {
        match self.id {
            SliderId::Size => settings.set_size(value),
            SliderId::Speed => settings.set_speed(value),
        }
    }

    fn shapes(&self, settings: &RippleSettings, out: &mut Vec<ShapeInstance>) {
        let t = self.spec.fraction(self.read(settings));
        let mid_y = self.rect.min.y + self.rect.size.y * 0.5;
        let track_min = Vec2::new(self.rect.min.x, mid_y - TRACK_HEIGHT * 0.5);
        let width = self.rect.size.x;
        out.push(ShapeInstance::rect(
            track_min,
            Vec2::new(width, TRACK_HEIGHT),
            TRACK_COLOR,
        ));
        out.push(ShapeInstance::rect(
            track_min,
            Vec2::new(width * t, TRACK_HEIGHT),
            FILL_COLOR,
        ));
        out.push(ShapeInstance::disc(
            Vec2::new(self.rect.min.x + width * t, mid_y),
            KNOB_RADIUS,
            FILL_COLOR,
        ));
    }
}

pub struct ControlPanel {
    sliders: [SliderWidget; 2],
    color_button: Rect,
    dragging: Option<SliderId>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            sliders: [
                SliderWidget {
                    id: SliderId::Size,
                    spec: SIZE_SLIDER,
                    rect: Rect {
                        min: SIZE_SLIDER_POS,
                        size: SLIDER_SIZE,
                    },
                },
                SliderWidget {
                    id: SliderId::Speed,
                    spec: SPEED_SLIDER,
                    rect: Rect {
                        min: SPEED_SLIDER_POS,
                        size: SLIDER_SIZE,
                    },
                },
            ],
            color_button: Rect {
                min: COLOR_BUTTON_POS,
                size: COLOR_BUTTON_SIZE,
            },
            dragging: None,
        }
    }
}

impl ControlPanel {
    /// Returns true when a control consumed the press.
    pub fn press(&mut self, p: Vec2, settings: &mut RippleSettings) -> bool {
        if let Some(slider) = self.sliders.iter().find(|s| s.rect.contains(p)) {
            slider.write(settings, slider.value_at(p));
            self.dragging = Some(slider.id);
            return true;
        }
        if self.color_button.contains(p) {
            settings.toggle_color_mode();
            log::info!("[ui] color mode -> {}", settings.color_mode.label());
            return true;
        }
        false
    }

    /// Follow the pointer while a slider is held. Returns true if a value changed.
    pub fn drag(&mut self, p: Vec2, settings: &mut RippleSettings) -> bool {
        let Some(id) = self.dragging else {
            return false;
        };
        let Some(slider) = self.sliders.iter().find(|s| s.id == id) else {
            return false;
        };
        let before = slider.read(settings);
        slider.write(settings, slider.value_at(p));
        slider.read(settings) != before
    }

    pub fn release(&mut self) {
        self.dragging = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn shapes(&self, settings: &RippleSettings) -> Vec<ShapeInstance> {
        let mut out = Vec::with_capacity(8);
        for slider in &self.sliders {
            slider.shapes(settings, &mut out);
        }
        let fill = match settings.color_mode {
            ColorMode::Dynamic => FILL_COLOR,
            ColorMode::Static => BUTTON_STATIC_COLOR,
        };
        out.push(ShapeInstance::rect(
            self.color_button.min,
            self.color_button.size,
            fill,
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_slider_maps_track_position_to_value() {
        let mut panel = ControlPanel::default();
        let mut settings = RippleSettings::default();
        let right_end = SIZE_SLIDER_POS + Vec2::new(SLIDER_SIZE.x, 10.0);
        assert!(panel.press(right_end, &mut settings));
        assert_eq!(settings.size(), SIZE_SLIDER.max);
        assert!(panel.is_dragging());

        let left_end = SIZE_SLIDER_POS + Vec2::new(0.0, 10.0);
        assert!(panel.drag(left_end, &mut settings));
        assert_eq!(settings.size(), SIZE_SLIDER.min);

        panel.release();
        assert!(!panel.drag(right_end, &mut settings));
        assert_eq!(settings.size(), SIZE_SLIDER.min);
    }

    #[test]
    fn speed_drag_past_track_end_clamps() {
        let mut panel = ControlPanel::default();
        let mut settings = RippleSettings::default();
        assert!(panel.press(SPEED_SLIDER_POS + Vec2::new(5.0, 5.0), &mut settings));
        panel.drag(Vec2::new(2000.0, 0.0), &mut settings);
        assert_eq!(settings.speed(), SPEED_SLIDER.max);
    }

    #[test]
    fn color_button_toggles_mode() {
        let mut panel = ControlPanel::default();
        let mut settings = RippleSettings::default();
        assert_eq!(settings.color_mode, ColorMode::Dynamic);
        assert!(panel.press(COLOR_BUTTON_POS + Vec2::splat(5.0), &mut settings));
        assert_eq!(settings.color_mode, ColorMode::Static);
        assert!(!panel.is_dragging());
    }

    #[test]
    fn presses_elsewhere_fall_through() {
        let mut panel = ControlPanel::default();
        let mut settings = RippleSettings::default();
        assert!(!panel.press(Vec2::new(400.0, 300.0), &mut settings));
        assert!(!panel.press(Vec2::new(400.0, 10.0), &mut settings));
        assert_eq!(settings, RippleSettings::default());
    }

    #[test]
    fn controls_fit_in_reserved_strip() {
        let panel = ControlPanel::default();
        let settings = RippleSettings::default();
        for shape in panel.shapes(&settings) {
            let bottom = shape.center[1] + shape.half_extent[1];
            assert!(bottom <= ripple_core::UI_RESERVED_HEIGHT);
        }
    }
}
