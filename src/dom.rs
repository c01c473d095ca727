use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `JsValue` errors don't implement `std::error::Error`.
#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn html_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("#{id} is not an HtmlElement"))
}

pub fn typed_element<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{id} has an unexpected element type"))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{element_id} to attach click handler");
    }
}

/// Attach a listener that lives as long as the page.
pub fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Replace one icon class with another.
#[inline]
pub fn swap_class(el: &web::Element, from: &str, to: &str) {
    let cl = el.class_list();
    _ = cl.remove_1(from);
    _ = cl.add_1(to);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Feature detection: does `target` expose `name` at all.
#[inline]
pub fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Numeric property, `None` when missing, null or not a number.
#[inline]
pub fn number_property(target: &JsValue, name: &str) -> Option<f64> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_f64())
}

/// One-shot timer; the closure is dropped by the browser after firing.
pub fn set_timeout(window: &web::Window, ms: i32, handler: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(handler);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        ms,
    );
}
