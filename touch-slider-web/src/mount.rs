use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Function;
use touch_slider::{Slider, SliderState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, TouchEvent};

use crate::dom::{DomRenderer, find_container, pad_edges};
use crate::listeners::{Callback, Listeners, supports_passive};
use crate::timer::TimeoutScheduler;
use crate::{MountOptions, SliderError};

type CoreSlider = Slider<DomRenderer, TimeoutScheduler>;

/// Queues index notifications while the controller is borrowed and delivers them to JS
/// afterwards, so the callback may safely call back into the slider (e.g. `destroy()`).
struct Notifier {
    pending: RefCell<Vec<usize>>,
    callback: Function,
}

impl Notifier {
    fn push(&self, index: usize) {
        self.pending.borrow_mut().push(index);
    }

    fn flush(&self) {
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        for index in pending {
            if let Err(err) = self
                .callback
                .call1(&JsValue::NULL, &JsValue::from(index as u32))
            {
                wwarn!("index callback threw: {err:?}");
            }
        }
    }
}

fn flush(notifier: &Option<Rc<Notifier>>) {
    if let Some(notifier) = notifier {
        notifier.flush();
    }
}

/// Runs `f` against the controller, then delivers queued index notifications.
///
/// Re-entrant events (fired while the controller is already borrowed) are dropped.
fn dispatch(
    slider: &Weak<RefCell<CoreSlider>>,
    notifier: &Option<Rc<Notifier>>,
    f: impl FnOnce(&mut CoreSlider),
) {
    let Some(slider) = slider.upgrade() else {
        return;
    };
    {
        let Ok(mut slider) = slider.try_borrow_mut() else {
            wwarn!("re-entrant slider event ignored");
            return;
        };
        f(&mut slider);
    }
    flush(notifier);
}

fn first_touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.page_x()))
}

fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// A slider mounted onto a container element.
///
/// Holds the controller, its listeners and its auto-play timer. Dropping it (or calling
/// [`MountedSlider::destroy`]) detaches everything; the padded DOM is left in place.
#[derive(Debug)]
pub struct MountedSlider {
    slider: Rc<RefCell<CoreSlider>>,
    listeners: Listeners,
    notifier: Option<Rc<Notifier>>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("pending", &self.pending.borrow().len())
            .finish_non_exhaustive()
    }
}

impl MountedSlider {
    /// Locates the container and its items, pads the track with edge clones, lays it out and
    /// starts listening.
    ///
    /// With fewer than two items nothing is padded or registered; the index callback still
    /// fires once with `0`.
    pub fn mount(options: MountOptions) -> Result<Self, SliderError> {
        let window = web_sys::window().ok_or(SliderError::NoWindow)?;
        let document = window.document().ok_or(SliderError::NoDocument)?;
        let container = find_container(&document, &options.container)?;
        let items = container.get_elements_by_class_name(&options.item);
        let item_count = items.length() as usize;
        wdebug!(
            "mounting `.{}` with {item_count} `.{}` items",
            options.container,
            options.item
        );
        if item_count > 1 {
            pad_edges(&container)?;
        }

        let notifier = options.on_index.clone().map(|callback| {
            Rc::new(Notifier {
                pending: RefCell::new(Vec::new()),
                callback,
            })
        });
        let mut slider_options = options.slider_options();
        if let Some(notifier) = &notifier {
            let notifier = Rc::clone(notifier);
            slider_options = slider_options.with_on_index(Some(move |i| notifier.push(i)));
        }

        let renderer = DomRenderer::new(window.clone(), container.clone(), items);
        let slider = Rc::new_cyclic(|weak: &Weak<RefCell<CoreSlider>>| {
            let scheduler = TimeoutScheduler::new(window.clone(), {
                let weak = weak.clone();
                let notifier = notifier.clone();
                move || dispatch(&weak, &notifier, |s| s.on_timer())
            });
            RefCell::new(Slider::new(slider_options, item_count, renderer, scheduler))
        });
        flush(&notifier);

        let mut mounted = Self {
            slider,
            listeners: Listeners::new(),
            notifier,
        };
        if item_count > 1 {
            let passive = supports_passive(&window);
            mounted.listen(&window, "resize", false, |s, _| s.on_resize())?;

            let target: &EventTarget = &container;
            mounted.listen(target, "touchstart", passive, move |s, event| {
                if !passive {
                    event.prevent_default();
                }
                if let Some(x) = first_touch_x(event) {
                    s.on_touch_start(x, now_ms());
                }
            })?;
            mounted.listen(target, "touchmove", false, |s, event| {
                event.prevent_default();
                if let Some(x) = first_touch_x(event) {
                    s.on_touch_move(x);
                }
            })?;
            mounted.listen(target, "touchend", false, |s, _| s.on_touch_end(now_ms()))?;
            mounted.listen(target, "transitionend", false, |s, event| {
                // Item transitions bubble up here too; only the track's own count.
                if event.target() == event.current_target() {
                    s.on_transition_end();
                }
            })?;
        }
        Ok(mounted)
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        mut handler: impl FnMut(&mut CoreSlider, &Event) + 'static,
    ) -> Result<(), SliderError> {
        let weak = Rc::downgrade(&self.slider);
        let notifier = self.notifier.clone();
        let callback: Callback = Closure::new(move |event: Event| {
            dispatch(&weak, &notifier, |s| handler(s, &event));
        });
        self.listeners.subscribe(target, event, passive, callback)
    }

    /// Detaches every listener and cancels the auto-play timer.
    ///
    /// Idempotent: calling it again does nothing.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        match self.slider.try_borrow_mut() {
            Ok(mut slider) => slider.teardown(),
            Err(_) => wwarn!("destroy() while the slider is busy; timer left running"),
        }
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn index(&self) -> usize {
        self.slider.borrow().index()
    }

    pub fn state(&self) -> SliderState {
        self.slider.borrow().state()
    }

    pub fn is_destroyed(&self) -> bool {
        self.slider.borrow().is_torn_down()
    }
}
