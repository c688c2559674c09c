use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, Window};

use crate::SliderError;

pub(crate) type Callback = Closure<dyn FnMut(Event)>;

struct Listener {
    target: EventTarget,
    callback: Callback,
}

/// Registered DOM listeners, one per event name.
///
/// Each entry owns its closure, so a listener stays callable exactly as long as it is
/// registered. Dropping the bag unsubscribes everything.
#[derive(Default)]
pub struct Listeners {
    entries: HashMap<&'static str, Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, event: &str) -> bool {
        self.entries.contains_key(event)
    }

    /// Registers `callback` for `event` on `target`, replacing any previous listener for the
    /// same event name.
    ///
    /// `passive` is only requested when the browser supports listener options.
    pub(crate) fn subscribe(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        callback: Callback,
    ) -> Result<(), SliderError> {
        self.unsubscribe(event);
        let function: &Function = callback.as_ref().unchecked_ref();
        if passive {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event, function, &options,
            )?;
        } else {
            target.add_event_listener_with_callback_and_bool(event, function, false)?;
        }
        wdebug!("subscribed `{event}` (passive: {passive})");
        self.entries.insert(
            event,
            Listener {
                target: target.clone(),
                callback,
            },
        );
        Ok(())
    }

    /// Removes the listener for `event`. Returns `false` when none was registered.
    pub fn unsubscribe(&mut self, event: &str) -> bool {
        let Some(listener) = self.entries.remove(event) else {
            return false;
        };
        let function: &Function = listener.callback.as_ref().unchecked_ref();
        if let Err(err) = listener
            .target
            .remove_event_listener_with_callback_and_bool(event, function, false)
        {
            wwarn!("failed to remove `{event}` listener: {err:?}");
        }
        true
    }

    /// Removes every listener. Calling this on an empty bag is a no-op.
    pub fn clear(&mut self) {
        let events: Vec<&'static str> = self.entries.keys().copied().collect();
        for event in events {
            self.unsubscribe(event);
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("events", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Detects support for the `passive` listener option.
///
/// Registers a throwaway listener with an options object whose `passive` getter records that
/// it was read. Any exception along the way counts as "unsupported".
pub fn supports_passive(window: &Window) -> bool {
    let read = Rc::new(Cell::new(false));
    let getter = Closure::<dyn FnMut()>::new({
        let read = Rc::clone(&read);
        move || read.set(true)
    });

    let probe = || -> Result<(), JsValue> {
        let descriptor = Object::new();
        Reflect::set(&descriptor, &JsValue::from_str("get"), getter.as_ref())?;
        let options = Object::new();
        Object::define_property(&options, &JsValue::from_str("passive"), &descriptor);

        let target: &JsValue = window.as_ref();
        let add: Function = Reflect::get(target, &JsValue::from_str("addEventListener"))?.dyn_into()?;
        let remove: Function =
            Reflect::get(target, &JsValue::from_str("removeEventListener"))?.dyn_into()?;
        let event = JsValue::from_str("test");
        add.call3(target, &event, &JsValue::NULL, &options)?;
        remove.call3(target, &event, &JsValue::NULL, &options)?;
        Ok(())
    };
    if let Err(err) = probe() {
        wdebug!("passive listener detection failed: {err:?}");
        return false;
    }
    read.get()
}
