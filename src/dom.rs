use crate::constants::{EVENT_CLICK, EVENT_DOM_READY, EVENT_RESIZE, FALLBACK_VIEWPORT_WIDTH};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(EVENT_CLICK, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_resize_listener(window: &web::Window, mut handler: impl FnMut(f64) + 'static) {
    let window_for_cb = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        handler(viewport_width(&window_for_cb));
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback(EVENT_RESIZE, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once the document has been parsed; immediately if it already has.
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = window_document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback(EVENT_DOM_READY, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
}

/// Current month in local time, 0-based.
#[inline]
pub fn current_month() -> u32 {
    js_sys::Date::new_0().get_month()
}

#[inline]
pub fn location_search(window: &web::Window) -> String {
    window.location().search().unwrap_or_default()
}

/// Decoded value of `key` in a `location.search` string. Percent escapes and
/// `+` are handled by the browser's `URLSearchParams`.
pub fn search_param(search: &str, key: &str) -> Option<String> {
    web::UrlSearchParams::new_with_str(search).ok()?.get(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn search_param_decodes_values() {
        assert_eq!(search_param("?christmas=true", "christmas").as_deref(), Some("true"));
        assert_eq!(search_param("?christmas=%74rue", "christmas").as_deref(), Some("true"));
        assert_eq!(search_param("?a=b+c&christmas=1", "a").as_deref(), Some("b c"));
        assert_eq!(search_param("?christmas=true&christmas=no", "christmas").as_deref(), Some("true"));
        assert_eq!(search_param("?christmas", "christmas").as_deref(), Some(""));
        assert_eq!(search_param("", "christmas"), None);
    }
}
