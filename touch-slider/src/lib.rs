//! A headless touch-swipe carousel ("slider") controller.
//!
//! For the browser binding (DOM padding, listeners, timers), see the `touch-slider-web` crate.
//!
//! The controller turns one in-flight horizontal drag into a live track offset, decides on
//! release (by a speed threshold) whether to move one item or snap back, and wraps seamlessly
//! past either end using a clone of the first and last item.
//!
//! It is UI-agnostic. A GUI layer is expected to provide:
//! - a [`Renderer`] that measures one item and applies transforms/transitions/scales
//! - a [`Scheduler`] for auto play (or `()` when auto play is off)
//! - touch, resize and transition-end events, forwarded to the `Slider::on_*` methods
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod gesture;
mod options;
mod renderer;
mod scale;
mod slider;
mod types;


pub use geometry::Geometry;
pub use gesture::{Gesture, decide};
pub use options::{
    DEFAULT_INTERVAL_MS, DEFAULT_RATE, DEFAULT_SCALE, IndexCallback, SliderOptions,
};
pub use renderer::{Renderer, SETTLE_DURATION_MS, Scheduler, TIMING_FUNCTION};
pub use scale::scale_plan;
pub use slider::Slider;
pub use types::{Cursor, Phase, SliderState, SwipeDecision};
