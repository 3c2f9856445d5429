use crate::ripple::{advance, is_done, stroke_alpha, Ripple};
use crate::surface::RippleSurface;
use crate::tone::ToneHandle;

/// A ripple plus the tone it started, if any.
#[derive(Debug)]
pub struct LiveRipple<H> {
    pub ripple: Ripple,
    tone: Option<H>,
}

impl<H: ToneHandle> LiveRipple<H> {
    pub fn has_tone(&self) -> bool {
        self.tone.is_some()
    }

    fn release(self) {
        if let Some(tone) = self.tone {
            tone.cancel();
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub drawn: usize,
    pub removed: usize,
}

/// Ordered set of on-screen ripples. Insertion order is draw order.
#[derive(Debug)]
pub struct RippleRegistry<H> {
    live: Vec<LiveRipple<H>>,
}

impl<H> Default for RippleRegistry<H> {
    fn default() -> Self {
        Self { live: Vec::new() }
    }
}

impl<H: ToneHandle> RippleRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, ripple: Ripple, tone: Option<H>) {
        self.live.push(LiveRipple { ripple, tone });
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.live.iter().map(|l| &l.ripple)
    }

    pub fn entries(&self) -> &[LiveRipple<H>] {
        &self.live
    }

    /// Advance, draw and prune every ripple once.
    ///
    /// Walks back to front so removing index `i` never shifts an entry that
    /// is still to be visited. A ripple that expires this tick is still drawn
    /// (at zero alpha) before it goes, and its tone is cancelled.
    pub fn tick<S: RippleSurface>(&mut self, surface: &mut S) -> TickReport {
        let mut report = TickReport::default();
        for i in (0..self.live.len()).rev() {
            let entry = &mut self.live[i];
            advance(&mut entry.ripple);
            let r = &entry.ripple;
            surface.stroke_ring(r.origin, r.radius, r.color, stroke_alpha(r));
            report.drawn += 1;

            if entry.tone.as_ref().is_some_and(|t| !t.is_active()) {
                entry.tone = None;
            }

            if is_done(&entry.ripple) {
                self.live.remove(i).release();
                report.removed += 1;
            }
        }
        report
    }

    /// Drop every ripple, cancelling any tone still sounding.
    pub fn clear(&mut self) {
        for entry in self.live.drain(..) {
            entry.release();
        }
    }
}
