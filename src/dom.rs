use crate::core::{LayoutGeometry, Rect, CANVAS_BACKING_SCALE};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_rect(window: &web::Window) -> Rect {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Rect::new(0.0, 0.0, width, viewport_height(window))
}

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// One layout read for the scroll metrics.
pub fn measure(window: &web::Window, el: &web::Element) -> LayoutGeometry {
    LayoutGeometry::from_rect(
        viewport_height(window),
        element_rect(el),
        window.scroll_y().unwrap_or(0.0),
    )
}

/// Look up `data-<name>` on an element.
#[inline]
pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}"))
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] invalid selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(el: &web::Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(name, value);
    }
}

/// Size the canvas backing store at 2× its CSS size and scale the context to
/// match, so drawing code works in CSS pixels. Returns the CSS size.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f64, f64) {
    let css_w = canvas.offset_width().max(0) as f64;
    let css_h = canvas.offset_height().max(0) as f64;
    canvas.set_width(((css_w * CANVAS_BACKING_SCALE) as u32).max(1));
    canvas.set_height(((css_h * CANVAS_BACKING_SCALE) as u32).max(1));
    _ = ctx.set_transform(
        CANVAS_BACKING_SCALE,
        0.0,
        0.0,
        CANVAS_BACKING_SCALE,
        0.0,
        0.0,
    );
    (css_w, css_h)
}
