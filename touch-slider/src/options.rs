use alloc::rc::Rc;

/// Default auto-advance interval.
pub const DEFAULT_INTERVAL_MS: u32 = 3000;
/// Default gesture sensitivity (pixels per millisecond).
pub const DEFAULT_RATE: f64 = 0.5;
/// Default scale of off-center items (no scaling).
pub const DEFAULT_SCALE: f32 = 1.0;

/// A callback fired with the current logical index.
///
/// It runs once when the slider is constructed, after every touch end and after every
/// auto-advance.
pub type IndexCallback = Rc<dyn Fn(usize)>;

/// Configuration for [`crate::Slider`].
///
/// Fields may hold any value; [`SliderOptions::normalized`] replaces out-of-range values with
/// their defaults. The slider normalizes once when it is constructed and never mutates its
/// options afterwards.
pub struct SliderOptions {
    /// Advance one item every `interval_ms` while no gesture is active.
    pub auto_play: bool,
    pub interval_ms: u32,

    /// Minimum swipe speed (`|displacement| / elapsed`, px/ms) that commits a shift.
    ///
    /// Valid values lie in the open interval `(0, 1)`: the smaller the value, the more
    /// sensitive the slider.
    pub rate: f64,

    /// Vertical scale applied to the neighbors of the centered item, in `(0, 1]`.
    ///
    /// `1.0` disables scaling entirely.
    pub scale: f32,

    pub on_index: Option<IndexCallback>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SliderOptions {
    fn clone(&self) -> Self {
        Self {
            auto_play: self.auto_play,
            interval_ms: self.interval_ms,
            rate: self.rate,
            scale: self.scale,
            on_index: self.on_index.clone(),
        }
    }
}

impl SliderOptions {
    pub fn new() -> Self {
        Self {
            auto_play: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            rate: DEFAULT_RATE,
            scale: DEFAULT_SCALE,
            on_index: None,
        }
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_on_index(mut self, on_index: Option<impl Fn(usize) + 'static>) -> Self {
        self.on_index = on_index.map(|f| Rc::new(f) as _);
        self
    }

    /// Returns a copy with every out-of-range value replaced by its default.
    pub fn normalized(&self) -> Self {
        let mut next = self.clone();
        if !(next.rate > 0.0 && next.rate < 1.0) {
            next.rate = DEFAULT_RATE;
        }
        if !(next.scale > 0.0 && next.scale <= 1.0) {
            next.scale = DEFAULT_SCALE;
        }
        if next.interval_ms == 0 {
            next.interval_ms = DEFAULT_INTERVAL_MS;
        }
        next
    }
}

impl core::fmt::Debug for SliderOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliderOptions")
            .field("auto_play", &self.auto_play)
            .field("interval_ms", &self.interval_ms)
            .field("rate", &self.rate)
            .field("scale", &self.scale)
            .field("on_index", &self.on_index.as_ref().map(|_| ".."))
            .finish()
    }
}
