use touch_slider::{Cursor, Renderer};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlCollection, HtmlElement, Node, Window};

use crate::SliderError;

/// Finds the first element with class `class_name`.
pub(crate) fn find_container(
    document: &Document,
    class_name: &str,
) -> Result<HtmlElement, SliderError> {
    document
        .get_elements_by_class_name(class_name)
        .item(0)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| SliderError::ContainerNotFound(class_name.to_owned()))
}

/// Prepends a deep clone of the last child element and appends a deep clone of the first.
pub(crate) fn pad_edges(container: &Element) -> Result<(), SliderError> {
    let (Some(first), Some(last)) = (
        container.first_element_child(),
        container.last_element_child(),
    ) else {
        return Ok(());
    };
    let clone_first = first.clone_node_with_deep(true)?;
    let clone_last = last.clone_node_with_deep(true)?;
    let first: &Node = &first;
    container.insert_before(&clone_last, Some(first))?;
    container.append_child(&clone_first)?;
    Ok(())
}

/// Parses a computed CSS length such as `"320.5px"`; anything else reads as 0.
pub(crate) fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse()
        .unwrap_or(0.0)
}

pub(crate) fn translate_x(offset: f64) -> String {
    format!("translate({offset}px, 0) translateZ(0)")
}

/// Draws a slider through the inline styles of its container and items.
///
/// `items` is the live class-name collection inside the container, so after padding it holds
/// the clones too and its indexes are padded indexes.
#[derive(Debug)]
pub struct DomRenderer {
    window: Window,
    container: HtmlElement,
    items: HtmlCollection,
}

impl DomRenderer {
    pub(crate) fn new(window: Window, container: HtmlElement, items: HtmlCollection) -> Self {
        Self {
            window,
            container,
            items,
        }
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    fn set(style: &CssStyleDeclaration, property: &str, value: &str) {
        if let Err(err) = style.set_property(property, value) {
            wwarn!("failed to set `{property}: {value}`: {err:?}");
        }
    }

    fn set_container(&self, property: &str, value: &str) {
        Self::set(&self.container.style(), property, value);
    }
}

impl Renderer for DomRenderer {
    fn measure_unit(&self) -> f64 {
        let Some(first) = self.container.first_element_child() else {
            return 0.0;
        };
        let style = match self.window.get_computed_style(&first) {
            Ok(Some(style)) => style,
            Ok(None) => return 0.0,
            Err(err) => {
                wwarn!("getComputedStyle failed: {err:?}");
                return 0.0;
            }
        };
        let read = |property: &str| {
            style
                .get_property_value(property)
                .map(|v| parse_px(&v))
                .unwrap_or(0.0)
        };
        read("width") + read("margin-right")
    }

    fn set_track_width(&mut self, width: f64) {
        self.set_container("width", &format!("{width}px"));
    }

    fn set_timing_function(&mut self, timing: &str) {
        self.set_container("transition-timing-function", timing);
    }

    fn set_transition_duration(&mut self, duration_ms: u32) {
        self.set_container("transition-duration", &format!("{duration_ms}ms"));
    }

    fn set_transform(&mut self, offset: f64) {
        let value = translate_x(offset);
        self.set_container("transform", &value);
        self.set_container("-webkit-transform", &value);
    }

    fn set_item_scale(&mut self, padded_index: usize, scale: f32) {
        let Some(item) = self
            .items
            .item(padded_index as u32)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            wdebug!("no item at padded index {padded_index}");
            return;
        };
        Self::set(&item.style(), "transform", &format!("scaleY({scale})"));
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        let value = match cursor {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        };
        self.set_container("cursor", value);
    }
}
