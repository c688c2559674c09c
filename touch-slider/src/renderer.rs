use crate::Cursor;

/// Duration of an animated settle.
pub const SETTLE_DURATION_MS: u32 = 300;

/// Deceleration curve used for every animated settle.
pub const TIMING_FUNCTION: &str = "cubic-bezier(0.165, 0.84, 0.44, 1)";

/// The drawing surface a [`crate::Slider`] drives.
///
/// Item indexes address the padded sequence (`item_count + 2` entries, clones included). An
/// adapter is expected to have laid that sequence out before constructing the slider.
///
/// Implementations report completion of an animated transform back through
/// [`crate::Slider::on_transition_end`].
pub trait Renderer {
    /// Width plus right margin of one item, in pixels.
    fn measure_unit(&self) -> f64;

    fn set_track_width(&mut self, width: f64);

    fn set_timing_function(&mut self, timing: &str);

    fn set_transition_duration(&mut self, duration_ms: u32);

    /// Translates the track horizontally to `offset` pixels.
    fn set_transform(&mut self, offset: f64);

    fn set_item_scale(&mut self, padded_index: usize, scale: f32);

    fn set_cursor(&mut self, _cursor: Cursor) {}
}

/// A single-shot timer for auto play.
///
/// At most one firing is pending at a time: `schedule` replaces any previous one. When it fires,
/// the adapter calls [`crate::Slider::on_timer`].
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32);

    fn cancel(&mut self);
}

/// A scheduler for sliders without auto play.
impl Scheduler for () {
    fn schedule(&mut self, _delay_ms: u32) {}

    fn cancel(&mut self) {}
}
