use crate::{Geometry, SwipeDecision};

/// State of the single in-flight touch gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gesture {
    pub active: bool,
    pub start_x: f64,
    pub start_ms: u64,
    /// `start_x - current_x`; positive for a leftward drag.
    pub displacement: f64,
    /// Offset the track is drawn at during the drag.
    pub live_offset: f64,
    /// Set once the live offset reaches either bound.
    pub touched_bound: bool,
}

impl Gesture {
    pub fn begin(x: f64, now_ms: u64, committed_offset: f64) -> Self {
        Self {
            active: true,
            start_x: x,
            start_ms: now_ms,
            displacement: 0.0,
            live_offset: committed_offset,
            touched_bound: false,
        }
    }

    /// Tracks the finger at `x` and returns the clamped live offset.
    pub fn track(&mut self, x: f64, committed_offset: f64, geometry: &Geometry) -> f64 {
        self.displacement = self.start_x - x;
        let offset = geometry.clamp(committed_offset - self.displacement);
        if geometry.touches_bound(offset) {
            self.touched_bound = true;
        }
        self.live_offset = offset;
        offset
    }

    /// Average speed since touch start, in px/ms.
    pub fn speed(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms).max(1);
        self.displacement.abs() / elapsed as f64
    }

    pub fn decide(&self, now_ms: u64, rate: f64) -> SwipeDecision {
        decide(self.displacement, self.speed(now_ms), rate, self.touched_bound)
    }
}

/// Decides the outcome of a swipe.
///
/// A swipe commits a one-item shift only when it was fast enough and never reached a bound.
pub fn decide(displacement: f64, speed: f64, rate: f64, touched_bound: bool) -> SwipeDecision {
    if touched_bound || displacement == 0.0 || speed < rate {
        return SwipeDecision::Stay;
    }
    if displacement > 0.0 {
        SwipeDecision::Advance
    } else {
        SwipeDecision::Retreat
    }
}
