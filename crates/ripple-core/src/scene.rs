//! Per-frame orchestration shared by the web and native frontends.

use crate::config::RippleSettings;
use crate::controls::KeyAction;
use crate::registry::{RippleRegistry, TickReport};
use crate::spawner::{ReservedRegion, Spawner};
use crate::surface::RippleSurface;
use crate::tone::{ToneHandle, ToneSink, ToneSpec};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub tick: TickReport,
    pub spawned: bool,
    pub tone_started: bool,
}

pub struct Scene<H> {
    pub settings: RippleSettings,
    spawner: Spawner,
    registry: RippleRegistry<H>,
    canvas: Vec2,
}

impl<H: ToneHandle> Scene<H> {
    pub fn new(canvas: Vec2, settings: RippleSettings) -> Self {
        Self {
            settings,
            spawner: Spawner::new(ReservedRegion::default()),
            registry: RippleRegistry::new(),
            canvas,
        }
    }

    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    pub fn resize(&mut self, canvas: Vec2) {
        self.canvas = canvas;
    }

    pub fn registry(&self) -> &RippleRegistry<H> {
        &self.registry
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn pointer_pressed(&mut self, pos: Vec2) {
        self.spawner.pointer_pressed(pos);
    }

    pub fn pointer_released(&mut self) {
        self.spawner.pointer_released();
    }

    pub fn apply(&mut self, action: KeyAction) {
        if self.settings.apply(action) {
            log::info!("[settings] {}", self.settings.summary());
        } else if action == KeyAction::Clear {
            log::info!("[scene] cleared {} ripples", self.registry.len());
            self.registry.clear();
        }
    }

    /// Advance existing ripples, then let the spawner add one for this frame.
    /// A new ripple is first drawn on the following frame.
    pub fn frame<S, T>(&mut self, pointer: Vec2, surface: &mut S, tones: &mut T) -> FrameReport
    where
        S: RippleSurface,
        T: ToneSink<Handle = H>,
    {
        let tick = self.registry.tick(surface);
        let mut report = FrameReport {
            tick,
            ..FrameReport::default()
        };

        if let Some(ripple) = self.spawner.frame(pointer, &self.settings, self.canvas) {
            let spec = ToneSpec::for_radius(ripple.initial_radius, self.settings.waveform);
            let tone = match tones.start(&spec) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::debug!("[tone] {}", e);
                    None
                }
            };
            report.spawned = true;
            report.tone_started = tone.is_some();
            self.registry.spawn(ripple, tone);
        }
        report
    }
}
