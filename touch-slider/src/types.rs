/// Where the slider is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Resting on an item; no gesture and no animation in flight.
    #[default]
    Idle,
    /// A touch is down and the track follows the finger.
    Dragging,
    /// An animated transition toward the committed offset is in flight.
    Settling,
}

/// Cursor feedback shown on the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cursor {
    Grab,
    Grabbing,
}

/// The outcome of a finished swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDecision {
    /// Leftward swipe: move to the next item.
    Advance,
    /// Rightward swipe: move to the previous item.
    Retreat,
    /// Too slow, or the drag ran into an edge: snap back.
    Stay,
}

/// A lightweight, serializable snapshot of the slider.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderState {
    pub index: usize,
    pub item_count: usize,
    pub phase: Phase,
    /// Offset the track rests at (or is animating toward).
    pub committed_offset: f64,
    /// Offset the track is drawn at right now; equals `committed_offset` outside a drag.
    pub live_offset: f64,
}
