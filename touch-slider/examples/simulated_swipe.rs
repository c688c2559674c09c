// Example: drive a slider headlessly with a printing renderer and a manual timer.
use std::cell::Cell;
use std::rc::Rc;

use touch_slider::{Cursor, Renderer, Scheduler, Slider, SliderOptions};

struct PrintRenderer {
    unit: f64,
}

impl Renderer for PrintRenderer {
    fn measure_unit(&self) -> f64 {
        self.unit
    }

    fn set_track_width(&mut self, width: f64) {
        println!("  track width = {width}px");
    }

    fn set_timing_function(&mut self, timing: &str) {
        println!("  timing = {timing}");
    }

    fn set_transition_duration(&mut self, duration_ms: u32) {
        println!("  duration = {duration_ms}ms");
    }

    fn set_transform(&mut self, offset: f64) {
        println!("  translate({offset}px, 0)");
    }

    fn set_item_scale(&mut self, padded_index: usize, scale: f32) {
        println!("  item[{padded_index}] scaleY({scale})");
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        println!("  cursor = {cursor:?}");
    }
}

/// Remembers whether a firing is pending; `main` plays the role of the event loop.
struct ManualTimer {
    pending: Rc<Cell<bool>>,
}

impl Scheduler for ManualTimer {
    fn schedule(&mut self, delay_ms: u32) {
        println!("  timer armed ({delay_ms}ms)");
        self.pending.set(true);
    }

    fn cancel(&mut self) {
        println!("  timer cancelled");
        self.pending.set(false);
    }
}

fn main() {
    let pending = Rc::new(Cell::new(false));
    let opts = SliderOptions::new()
        .with_auto_play(true)
        .with_interval_ms(2_000)
        .with_scale(0.9)
        .with_on_index(Some(|i| println!("-> index {i}")));

    println!("init");
    let mut slider = Slider::new(
        opts,
        3,
        PrintRenderer { unit: 320.0 },
        ManualTimer {
            pending: Rc::clone(&pending),
        },
    );

    println!("fast swipe left");
    slider.on_touch_start(300.0, 0);
    slider.on_touch_move(180.0);
    slider.on_touch_end(90);
    slider.on_transition_end();

    println!("two auto-advance firings");
    for _ in 0..2 {
        if pending.replace(false) {
            slider.on_timer();
            slider.on_transition_end();
        }
    }

    println!("teardown");
    slider.teardown();
    println!("state: {:?}", slider.state());
}
