//! Tone model: what a ripple sounds like, independent of the audio backend.

use crate::constants::{
    TONE_ATTACK_SEC, TONE_FREQUENCY_RANGE_HZ, TONE_PEAK_AMPLITUDE, TONE_RADIUS_RANGE,
    TONE_STOP_AFTER_SEC,
};
use crate::error::ToneError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Saw,
    Triangle,
}

impl Waveform {
    pub fn next(self) -> Self {
        match self {
            Waveform::Sine => Waveform::Square,
            Waveform::Square => Waveform::Saw,
            Waveform::Saw => Waveform::Triangle,
            Waveform::Triangle => Waveform::Sine,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Saw => "saw",
            Waveform::Triangle => "triangle",
        }
    }

    /// One sample at `phase` radians, in [-1, 1].
    pub fn sample(self, phase: f32) -> f32 {
        let tau = std::f32::consts::TAU;
        match self {
            Waveform::Sine => phase.sin(),
            Waveform::Square => {
                if phase.sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => {
                let t = phase / tau;
                2.0 * (t - t.floor()) - 1.0
            }
            Waveform::Triangle => {
                let t = phase / tau;
                let saw = 2.0 * (t - t.floor()) - 1.0;
                2.0 * saw.abs() - 1.0
            }
        }
    }
}

/// Everything a backend needs to play one ripple's tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub frequency_hz: f32,
    pub peak_amplitude: f32,
    pub attack_sec: f32,
    pub stop_after_sec: f32,
}

impl ToneSpec {
    pub fn for_radius(radius: f32, waveform: Waveform) -> Self {
        Self {
            waveform,
            frequency_hz: radius_to_frequency(radius),
            peak_amplitude: TONE_PEAK_AMPLITUDE,
            attack_sec: TONE_ATTACK_SEC,
            stop_after_sec: TONE_STOP_AFTER_SEC,
        }
    }

    /// Amplitude `t` seconds after start: linear attack, hold, silence after
    /// the stop time.
    pub fn gain_at(&self, t: f32) -> f32 {
        if t < 0.0 || t >= self.stop_after_sec {
            return 0.0;
        }
        if self.attack_sec > 0.0 && t < self.attack_sec {
            self.peak_amplitude * (t / self.attack_sec)
        } else {
            self.peak_amplitude
        }
    }
}

/// Linear remap, not clamped.
#[inline]
pub fn map_range(value: f32, from: [f32; 2], to: [f32; 2]) -> f32 {
    let span = from[1] - from[0];
    if span == 0.0 {
        return to[0];
    }
    to[0] + (value - from[0]) / span * (to[1] - to[0])
}

#[inline]
pub fn radius_to_frequency(radius: f32) -> f32 {
    map_range(radius, TONE_RADIUS_RANGE, TONE_FREQUENCY_RANGE_HZ)
}

/// Audio backend able to start one-shot tones.
pub trait ToneSink {
    type Handle: ToneHandle;

    fn start(&mut self, tone: &ToneSpec) -> Result<Self::Handle, ToneError>;
}

/// Owned reference to a playing (or finished) tone.
pub trait ToneHandle {
    /// False once the tone has stopped on its own.
    fn is_active(&self) -> bool;

    /// Stop now. Must be harmless when the tone already ended.
    fn cancel(self);
}

impl ToneHandle for () {
    fn is_active(&self) -> bool {
        false
    }

    fn cancel(self) {}
}

/// Sink used when no audio device could be opened.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentTones;

impl ToneSink for SilentTones {
    type Handle = ();

    fn start(&mut self, _tone: &ToneSpec) -> Result<(), ToneError> {
        Err(ToneError::Unavailable)
    }
}
