use crate::gesture::Gesture;
use crate::renderer::{Renderer, Scheduler, SETTLE_DURATION_MS, TIMING_FUNCTION};
use crate::scale::scale_plan;
use crate::{Cursor, Geometry, Phase, SliderOptions, SliderState, SwipeDecision};

/// A headless touch-swipe carousel controller.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects; all drawing goes through a [`Renderer`].
/// - Auto play is driven by a [`Scheduler`] that calls back into [`Slider::on_timer`].
/// - Your adapter forwards touch, resize and transition-end events to the `on_*` methods.
///
/// The committed position is tracked as a padded index (see [`Geometry`]), so geometry can be
/// re-measured at any time without losing the displayed item.
///
/// With fewer than two items the slider is inert: every event is ignored and the index
/// callback fires exactly once (with `0`) from [`Slider::new`].
#[derive(Debug)]
pub struct Slider<R, S = ()> {
    options: SliderOptions,
    renderer: R,
    scheduler: S,
    geometry: Geometry,
    gesture: Gesture,
    phase: Phase,
    index: usize,
    committed: usize,
    timer_pending: bool,
    torn_down: bool,
}

impl<R: Renderer, S: Scheduler> Slider<R, S> {
    /// Creates a slider over `item_count` real items and lays out the track.
    ///
    /// The renderer must already address the padded sequence (`item_count + 2` items). Options
    /// are normalized here; out-of-range values fall back to their defaults.
    pub fn new(options: SliderOptions, item_count: usize, renderer: R, scheduler: S) -> Self {
        let options = options.normalized();
        sdebug!(
            item_count,
            auto_play = options.auto_play,
            interval_ms = options.interval_ms,
            rate = options.rate,
            scale = options.scale,
            "Slider::new"
        );
        let mut s = Self {
            geometry: Geometry::new(0.0, item_count),
            options,
            renderer,
            scheduler,
            gesture: Gesture::default(),
            phase: Phase::Idle,
            index: 0,
            committed: 1,
            timer_pending: false,
            torn_down: false,
        };

        s.emit_index();
        if s.is_interactive() {
            s.layout();
            s.schedule_auto();
        }
        s
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn item_count(&self) -> usize {
        self.geometry.item_count
    }

    /// The logical index of the displayed item.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the slider reacts to events at all (two or more items).
    pub fn is_interactive(&self) -> bool {
        self.geometry.item_count > 1
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn is_timer_pending(&self) -> bool {
        self.timer_pending
    }

    pub fn committed_offset(&self) -> f64 {
        self.geometry.offset_of(self.committed)
    }

    pub fn live_offset(&self) -> f64 {
        if self.gesture.active {
            self.gesture.live_offset
        } else {
            self.committed_offset()
        }
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> SliderState {
        SliderState {
            index: self.index,
            item_count: self.geometry.item_count,
            phase: self.phase,
            committed_offset: self.committed_offset(),
            live_offset: self.live_offset(),
        }
    }

    fn accepts_events(&self) -> bool {
        self.is_interactive() && !self.torn_down
    }

    /// Starts a drag at horizontal page position `x`.
    ///
    /// Cancels any pending auto-advance. If the track still rests on an edge clone (its
    /// transition end never arrived), it is first re-snapped onto the real item.
    pub fn on_touch_start(&mut self, x: f64, now_ms: u64) {
        if !self.accepts_events() {
            return;
        }
        self.cancel_auto();
        if self.geometry.is_clone(self.committed) {
            self.resnap();
        }

        self.gesture = Gesture::begin(x, now_ms, self.committed_offset());
        self.phase = Phase::Dragging;
        strace!(x, now_ms, committed = self.committed, "on_touch_start");
        self.renderer.set_cursor(Cursor::Grabbing);
        self.renderer.set_transition_duration(0);
    }

    /// Moves the track along with the finger, clamped to the track bounds.
    pub fn on_touch_move(&mut self, x: f64) {
        if !self.accepts_events() || !self.gesture.active {
            return;
        }
        let committed = self.committed_offset();
        let offset = self.gesture.track(x, committed, &self.geometry);
        self.renderer.set_transform(offset);
    }

    /// Finishes the drag: commits a one-item shift or snaps back, then animates there.
    ///
    /// The index callback fires even when the index did not change.
    pub fn on_touch_end(&mut self, now_ms: u64) {
        if !self.accepts_events() || !self.gesture.active {
            return;
        }
        let decision = self.gesture.decide(now_ms, self.options.rate);
        let live = self.gesture.live_offset;
        sdebug!(
            ?decision,
            displacement = self.gesture.displacement,
            speed = self.gesture.speed(now_ms),
            touched_bound = self.gesture.touched_bound,
            "on_touch_end"
        );
        self.gesture = Gesture::default();
        self.renderer.set_cursor(Cursor::Grab);

        let target = match decision {
            SwipeDecision::Advance => self.committed + 1,
            SwipeDecision::Retreat => self.committed.saturating_sub(1),
            SwipeDecision::Stay => self.committed,
        };
        self.settle_at(target, live);
        self.index = self.geometry.logical_of(target);
        self.emit_index();
        self.apply_scale();
        self.schedule_auto();
    }

    /// Completes a settle. Resting on an edge clone re-snaps (zero duration) to the real item it
    /// mirrors; any other firing only marks the slider idle.
    pub fn on_transition_end(&mut self) {
        if !self.accepts_events() || self.phase == Phase::Dragging {
            return;
        }
        if self.geometry.is_clone(self.committed) {
            self.resnap();
        }
        self.phase = Phase::Idle;
    }

    /// Re-measures the items and redraws the current item without animation.
    pub fn on_resize(&mut self) {
        if !self.accepts_events() {
            return;
        }
        self.layout();
        if self.phase == Phase::Settling {
            self.phase = Phase::Idle;
        }
    }

    /// Auto-advance firing.
    ///
    /// While a gesture is active the advance is deferred by another interval, never dropped.
    pub fn on_timer(&mut self) {
        if !self.accepts_events() {
            return;
        }
        self.timer_pending = false;
        if self.gesture.active {
            strace!("on_timer: gesture active, deferring");
            self.schedule_auto();
            return;
        }
        if self.geometry.is_clone(self.committed) {
            self.resnap();
        }

        let target = self.committed + 1;
        self.animate_to(target);
        self.index = self.geometry.logical_of(target);
        strace!(index = self.index, "on_timer: advanced");
        self.emit_index();
        self.apply_scale();
        self.schedule_auto();
    }

    /// Cancels any pending auto-advance and stops reacting to events.
    ///
    /// Calling this more than once is a no-op.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        sdebug!(timer_pending = self.timer_pending, "Slider::teardown");
        self.cancel_auto();
        self.gesture = Gesture::default();
        self.phase = Phase::Idle;
        self.torn_down = true;
    }

    fn layout(&mut self) {
        let unit = self.renderer.measure_unit();
        self.geometry = Geometry::new(unit, self.geometry.item_count);
        if self.geometry.unit == 0.0 {
            swarn!(measured = unit, "layout: item has no usable width");
        }
        strace!(unit = self.geometry.unit, "layout");

        self.renderer.set_track_width(self.geometry.track_width());
        self.renderer.set_timing_function(TIMING_FUNCTION);
        let real = self.geometry.unwrap_clone(self.committed);
        self.snap_to(real);
        self.apply_scale();
    }

    fn snap_to(&mut self, padded: usize) {
        self.committed = padded;
        self.renderer.set_transition_duration(0);
        self.renderer.set_transform(self.geometry.offset_of(padded));
    }

    fn animate_to(&mut self, padded: usize) {
        self.committed = padded;
        self.renderer.set_transition_duration(SETTLE_DURATION_MS);
        self.renderer.set_transform(self.geometry.offset_of(padded));
        self.phase = Phase::Settling;
    }

    /// Settles at `target` coming from the live offset `from`.
    ///
    /// A settle that would not move the track happens with zero duration: no transition runs,
    /// so no transition end will arrive for it.
    fn settle_at(&mut self, target: usize, from: f64) {
        if self.geometry.offset_of(target) != from {
            self.animate_to(target);
            return;
        }
        self.snap_to(target);
        if self.geometry.is_clone(target) {
            self.resnap();
        }
        self.phase = Phase::Idle;
    }

    fn resnap(&mut self) {
        let real = self.geometry.unwrap_clone(self.committed);
        sdebug!(from = self.committed, to = real, "wrap re-snap");
        self.snap_to(real);
    }

    fn apply_scale(&mut self) {
        for (padded, scale) in scale_plan(self.index, self.geometry.item_count, self.options.scale)
        {
            self.renderer.set_item_scale(padded, scale);
        }
    }

    fn emit_index(&self) {
        if let Some(cb) = &self.options.on_index {
            cb(self.index);
        }
    }

    fn schedule_auto(&mut self) {
        if !self.options.auto_play || self.torn_down {
            return;
        }
        self.scheduler.schedule(self.options.interval_ms);
        self.timer_pending = true;
    }

    fn cancel_auto(&mut self) {
        if !self.timer_pending {
            return;
        }
        self.scheduler.cancel();
        self.timer_pending = false;
    }
}
