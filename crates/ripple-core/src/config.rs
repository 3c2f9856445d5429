//! Runtime settings published by the UI controls and read by the spawner.
//!
//! Values are read once when a ripple is created; changing them never affects
//! ripples already on screen.

use crate::color::ColorMode;
use crate::constants::{SIZE_SLIDER, SPEED_SLIDER};
use crate::controls::KeyAction;
use crate::error::ConfigError;
use crate::tone::Waveform;

#[derive(Clone, Debug, PartialEq)]
pub struct RippleSettings {
    size: f32,
    speed: f32,
    pub color_mode: ColorMode,
    pub waveform: Waveform,
}

impl Default for RippleSettings {
    fn default() -> Self {
        Self {
            size: SIZE_SLIDER.default,
            speed: SPEED_SLIDER.default,
            color_mode: ColorMode::default(),
            waveform: Waveform::default(),
        }
    }
}

impl RippleSettings {
    pub fn new(size: f32, speed: f32, color_mode: ColorMode) -> Result<Self, ConfigError> {
        let size = SIZE_SLIDER.validate("size", size)?;
        let speed = SPEED_SLIDER.validate("speed", speed)?;
        Ok(Self {
            size,
            speed,
            color_mode,
            waveform: Waveform::default(),
        })
    }

    /// Initial ripple radius.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Multiplier applied to the drag delta.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = SIZE_SLIDER.quantize(size);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = SPEED_SLIDER.quantize(speed);
    }

    pub fn set_size_str(&mut self, input: &str) -> Result<(), ConfigError> {
        self.size = SIZE_SLIDER.parse("size", input)?;
        Ok(())
    }

    pub fn set_speed_str(&mut self, input: &str) -> Result<(), ConfigError> {
        self.speed = SPEED_SLIDER.parse("speed", input)?;
        Ok(())
    }

    pub fn toggle_color_mode(&mut self) {
        self.color_mode = self.color_mode.toggled();
    }

    pub fn cycle_waveform(&mut self) {
        self.waveform = self.waveform.next();
    }

    /// Apply a keyboard action that targets settings. Returns false for
    /// actions that are not settings changes (e.g. clearing ripples).
    pub fn apply(&mut self, action: KeyAction) -> bool {
        use crate::constants::{SIZE_NUDGE, SPEED_NUDGE};
        match action {
            KeyAction::ToggleColorMode => self.toggle_color_mode(),
            KeyAction::CycleWaveform => self.cycle_waveform(),
            KeyAction::SizeUp => self.set_size(self.size + SIZE_NUDGE),
            KeyAction::SizeDown => self.set_size(self.size - SIZE_NUDGE),
            KeyAction::SpeedUp => self.set_speed(self.speed + SPEED_NUDGE),
            KeyAction::SpeedDown => self.set_speed(self.speed - SPEED_NUDGE),
            KeyAction::Clear => return false,
        }
        true
    }

    /// One-line summary for window titles and logs.
    pub fn summary(&self) -> String {
        format!(
            "size {:.0} | speed {:.1} | {} | {}",
            self.size,
            self.speed,
            self.color_mode.label(),
            self.waveform.label()
        )
    }
}
