//! Control descriptions shared by the DOM sliders (web) and the on-canvas
//! widgets (native), plus the keyboard shortcut map.

use crate::error::ConfigError;

/// Range slider description: bounds, step and initial value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl SliderSpec {
    /// Clamp into range and snap to the nearest step from `min`.
    pub fn quantize(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        // Rounding can overshoot by a hair (e.g. 0.1 * 20); keep inside bounds.
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Position of `value` along the track, in [0, 1].
    pub fn fraction(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Inverse of [`fraction`](Self::fraction), quantized.
    pub fn from_fraction(&self, t: f32) -> f32 {
        self.quantize(self.min + t.clamp(0.0, 1.0) * (self.max - self.min))
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check a raw value without quantizing it.
    pub fn validate(&self, name: &'static str, value: f32) -> Result<f32, ConfigError> {
        if value.is_finite() && self.contains(value) {
            Ok(value)
        } else {
            Err(ConfigError::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Parse a slider's string value (as reported by `<input type=range>`).
    pub fn parse(&self, name: &'static str, input: &str) -> Result<f32, ConfigError> {
        let value: f32 = input.trim().parse().map_err(|_| ConfigError::Parse {
            name,
            input: input.to_string(),
        })?;
        self.validate(name, value).map(|v| self.quantize(v))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleColorMode,
    CycleWaveform,
    SizeUp,
    SizeDown,
    SpeedUp,
    SpeedDown,
    Clear,
}

/// Map a key name (DOM `KeyboardEvent.key` spelling) to an action.
#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "c" | "C" => Some(KeyAction::ToggleColorMode),
        "w" | "W" => Some(KeyAction::CycleWaveform),
        "]" => Some(KeyAction::SizeUp),
        "[" => Some(KeyAction::SizeDown),
        "=" | "+" => Some(KeyAction::SpeedUp),
        "-" | "_" => Some(KeyAction::SpeedDown),
        "Escape" => Some(KeyAction::Clear),
        _ => None,
    }
}
