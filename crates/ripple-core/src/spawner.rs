//! Pointer drag gate: decides, frame by frame, whether pointer motion becomes
//! a new ripple.

use crate::config::RippleSettings;
use crate::constants::UI_RESERVED_HEIGHT;
use crate::ripple::{spawn_ripple, Ripple};
use glam::Vec2;

/// Top strip of the surface owned by the controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReservedRegion {
    pub height: f32,
}

impl Default for ReservedRegion {
    fn default() -> Self {
        Self {
            height: UI_RESERVED_HEIGHT,
        }
    }
}

impl ReservedRegion {
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.y <= self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragGate {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Debug, Default)]
pub struct Spawner {
    gate: DragGate,
    region: ReservedRegion,
    prev_pointer: Option<Vec2>,
}

impl Spawner {
    pub fn new(region: ReservedRegion) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    pub fn gate(&self) -> DragGate {
        self.gate
    }

    pub fn region(&self) -> ReservedRegion {
        self.region
    }

    /// Presses inside the reserved strip belong to the controls and leave
    /// the gate idle.
    pub fn pointer_pressed(&mut self, pos: Vec2) {
        if self.region.contains(pos) {
            self.gate = DragGate::Idle;
            return;
        }
        if self.gate == DragGate::Idle {
            log::debug!("[drag] begin at ({:.0}, {:.0})", pos.x, pos.y);
        }
        self.gate = DragGate::Dragging;
    }

    pub fn pointer_released(&mut self) {
        if self.gate == DragGate::Dragging {
            log::debug!("[drag] end");
        }
        self.gate = DragGate::Idle;
    }

    /// Run once per frame with the current pointer position. Emits at most one
    /// ripple; the delta is measured against the previous frame's pointer.
    pub fn frame(
        &mut self,
        pointer: Vec2,
        settings: &RippleSettings,
        canvas: Vec2,
    ) -> Option<Ripple> {
        let prev = self.prev_pointer.replace(pointer).unwrap_or(pointer);
        if self.gate != DragGate::Dragging || self.region.contains(pointer) {
            return None;
        }
        Some(spawn_ripple(pointer, pointer - prev, settings, canvas))
    }
}
