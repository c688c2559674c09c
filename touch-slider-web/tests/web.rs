#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use touch_slider::Phase;
use touch_slider_web::{MountOptions, MountedSlider, SliderError, supports_passive};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventTarget, HtmlElement, Touch, TouchEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Builds `<div class="{container}">` holding `n` fixed-width items and returns it.
fn fixture(container: &str, n: usize) -> HtmlElement {
    let doc = document();
    let root: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    root.set_class_name(container);
    for i in 0..n {
        let item: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
        item.set_class_name("item");
        item.set_text_content(Some(&i.to_string()));
        item.style().set_property("width", "200px").unwrap();
        item.style().set_property("margin-right", "10px").unwrap();
        item.style().set_property("display", "inline-block").unwrap();
        root.append_child(&item).unwrap();
    }
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn recorder() -> (Rc<RefCell<Vec<u32>>>, js_sys::Function) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let callback = Closure::<dyn FnMut(u32)>::new({
        let seen = Rc::clone(&seen);
        move |i| seen.borrow_mut().push(i)
    });
    let function: js_sys::Function = callback.as_ref().unchecked_ref::<js_sys::Function>().clone();
    callback.forget();
    (seen, function)
}

fn init(pairs: &[(&str, JsValue)]) -> js_sys::Object {
    let obj = js_sys::Object::new();
    for (key, value) in pairs {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
    }
    obj
}

fn bubbling_event(kind: &str) -> Event {
    Event::new_with_event_init_dict(kind, init(&[("bubbles", true.into())]).unchecked_ref()).unwrap()
}

/// A cancelable touch event with one touch at `page_x`, or `None` where the browser has no
/// touch constructors (desktop Firefox).
fn touch_event(kind: &str, target: &EventTarget, page_x: f64) -> Option<TouchEvent> {
    let touch = Touch::new(
        init(&[
            ("identifier", JsValue::from(0)),
            ("target", JsValue::from(target.clone())),
            ("pageX", page_x.into()),
        ])
        .unchecked_ref(),
    )
    .ok()?;
    TouchEvent::new_with_event_init_dict(
        kind,
        init(&[
            ("bubbles", true.into()),
            ("cancelable", true.into()),
            ("touches", js_sys::Array::of1(&touch).into()),
        ])
        .unchecked_ref(),
    )
    .ok()
}

/// Drags one finger across `root` from `from` to `to` and lifts it.
///
/// Returns whether the `touchmove` default was prevented.
fn swipe(root: &HtmlElement, from: f64, to: f64) -> Option<bool> {
    let start = touch_event("touchstart", root, from)?;
    let moved = touch_event("touchmove", root, to)?;
    root.dispatch_event(&start).unwrap();
    let move_allowed = root.dispatch_event(&moved).unwrap();
    root.dispatch_event(&bubbling_event("touchend")).unwrap();
    Some(!move_allowed)
}

#[wasm_bindgen_test]
fn mount_pads_track_and_lays_out() {
    let root = fixture("pad-test", 4);
    let (seen, callback) = recorder();
    let mut opts = MountOptions::new("pad-test", "item");
    opts.on_index = Some(callback);

    let mut slider = MountedSlider::mount(opts).unwrap();

    assert_eq!(root.children().length(), 6);
    assert_eq!(root.first_element_child().unwrap().text_content().unwrap(), "3");
    assert_eq!(root.last_element_child().unwrap().text_content().unwrap(), "0");
    assert_eq!(*seen.borrow(), [0]);
    assert_eq!(slider.index(), 0);
    assert_eq!(slider.state().committed_offset, -210.0);

    let style = root.style();
    assert_eq!(style.get_property_value("width").unwrap(), "1050px");
    assert!(
        style
            .get_property_value("transform")
            .unwrap()
            .starts_with("translate(-210px")
    );
    assert_eq!(slider.listeners().len(), 5);

    slider.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn single_item_is_left_untouched() {
    let root = fixture("single-test", 1);
    let (seen, callback) = recorder();
    let mut opts = MountOptions::new("single-test", "item");
    opts.on_index = Some(callback);

    let slider = MountedSlider::mount(opts).unwrap();

    assert_eq!(root.children().length(), 1);
    assert!(slider.listeners().is_empty());
    assert_eq!(*seen.borrow(), [0]);
    assert_eq!(root.style().get_property_value("transform").unwrap(), "");
    root.remove();
}

#[wasm_bindgen_test]
fn missing_container_is_an_error() {
    let err = MountedSlider::mount(MountOptions::new("no-such-container", "item")).unwrap_err();
    assert!(matches!(err, SliderError::ContainerNotFound(ref name) if name == "no-such-container"));
}

#[wasm_bindgen_test]
fn options_parse_from_js_object_with_fallbacks() {
    let obj = js_sys::Object::new();
    let set = |k: &str, v: JsValue| {
        js_sys::Reflect::set(&obj, &JsValue::from_str(k), &v).unwrap();
    };
    set("container", "c".into());
    set("item", "i".into());
    set("auto", JsValue::from_str("yes"));
    set("autoTime", JsValue::from_f64(1500.0));
    set("rate", JsValue::from_f64(0.25));
    set("scale", JsValue::from_f64(2.0));

    let opts = MountOptions::from_js(&obj).unwrap();
    assert_eq!(opts.container, "c");
    assert_eq!(opts.item, "i");
    assert!(!opts.auto_play);
    assert_eq!(opts.interval_ms, 1500);
    assert_eq!(opts.rate, 0.25);
    assert!(opts.on_index.is_none());
    assert_eq!(opts.slider_options().normalized().scale, 1.0);

    let err = MountOptions::from_js(&js_sys::Object::new()).unwrap_err();
    assert!(matches!(err, SliderError::MissingOption("container")));
    let err = MountOptions::from_js(&JsValue::from_f64(3.0)).unwrap_err();
    assert!(matches!(err, SliderError::MissingOption("container")));
}

#[wasm_bindgen_test]
fn destroy_is_idempotent() {
    let root = fixture("destroy-test", 3);
    let mut opts = MountOptions::new("destroy-test", "item");
    opts.auto_play = true;

    let mut slider = MountedSlider::mount(opts).unwrap();
    assert_eq!(slider.listeners().len(), 5);

    slider.destroy();
    assert!(slider.listeners().is_empty());
    assert!(slider.is_destroyed());
    slider.destroy();
    assert!(slider.listeners().is_empty());
    assert_eq!(slider.state().phase, Phase::Idle);
    root.remove();
}

#[wasm_bindgen_test]
fn passive_detection_does_not_throw() {
    let window = web_sys::window().unwrap();
    // Every browser that runs wasm supports listener options.
    assert!(supports_passive(&window));
}

#[wasm_bindgen_test]
fn touch_events_drive_the_slider() {
    let root = fixture("touch-test", 4);
    let (seen, callback) = recorder();
    let mut opts = MountOptions::new("touch-test", "item");
    opts.on_index = Some(callback);
    let mut slider = MountedSlider::mount(opts).unwrap();

    let Some(move_prevented) = swipe(&root, 300.0, 250.0) else {
        slider.destroy();
        root.remove();
        return;
    };
    assert!(move_prevented);
    assert_eq!(slider.index(), 1);
    assert_eq!(*seen.borrow(), [0, 1]);
    assert_eq!(slider.state().committed_offset, -420.0);
    assert!(
        root.style()
            .get_property_value("transform")
            .unwrap()
            .starts_with("translate(-420px")
    );

    slider.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn item_transition_end_does_not_resnap() {
    let root = fixture("bubble-test", 4);
    let mut slider = MountedSlider::mount(MountOptions::new("bubble-test", "item")).unwrap();

    // Right swipe from item 0 settles on the prepended clone of item 3.
    if swipe(&root, 300.0, 350.0).is_none() {
        slider.destroy();
        root.remove();
        return;
    }
    assert_eq!(slider.index(), 3);
    assert_eq!(slider.state().phase, Phase::Settling);
    assert_eq!(slider.state().committed_offset, 0.0);

    let item: EventTarget = root.children().item(2).unwrap().into();
    item.dispatch_event(&bubbling_event("transitionend")).unwrap();
    assert_eq!(slider.state().phase, Phase::Settling);
    assert_eq!(slider.state().committed_offset, 0.0);

    root.dispatch_event(&bubbling_event("transitionend")).unwrap();
    assert_eq!(slider.state().phase, Phase::Idle);
    assert_eq!(slider.state().committed_offset, -840.0);
    assert_eq!(slider.index(), 3);

    slider.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn index_callback_may_destroy_the_slider() {
    let root = fixture("reentrant-test", 3);
    let slot: Rc<RefCell<Option<MountedSlider>>> = Rc::new(RefCell::new(None));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let callback = Closure::<dyn FnMut(u32)>::new({
        let slot = Rc::clone(&slot);
        let seen = Rc::clone(&seen);
        move |i| {
            seen.borrow_mut().push(i);
            if let Some(slider) = slot.borrow_mut().as_mut() {
                slider.destroy();
            }
        }
    });
    let mut opts = MountOptions::new("reentrant-test", "item");
    opts.on_index = Some(callback.as_ref().unchecked_ref::<js_sys::Function>().clone());
    callback.forget();

    *slot.borrow_mut() = Some(MountedSlider::mount(opts).unwrap());
    assert_eq!(*seen.borrow(), [0]);

    if swipe(&root, 300.0, 250.0).is_some() {
        assert_eq!(*seen.borrow(), [0, 1]);
        {
            let slot = slot.borrow();
            let slider = slot.as_ref().unwrap();
            assert!(slider.listeners().is_empty());
            assert!(slider.is_destroyed());
            assert_eq!(slider.index(), 1);
        }

        // Detached: touches are no longer handled.
        assert_eq!(swipe(&root, 300.0, 250.0), Some(false));
        assert_eq!(*seen.borrow(), [0, 1]);
    }

    drop(slot.borrow_mut().take());
    root.remove();
}
