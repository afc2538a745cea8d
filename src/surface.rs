//! `Surface` implementation over the live DOM.

use crate::constants::{DECORATION_TAG, PLAY_STATE_PROPERTY};
use crate::dom;
use festive_core::{Decoration, ElementSpec, PlayState, Surface, VisibilityCallback};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A generated `<div>` inside the container.
#[derive(Clone)]
pub struct DomDecoration(pub web::HtmlElement);

impl Decoration for DomDecoration {
    fn set_play_state(&self, state: PlayState) {
        _ = self
            .0
            .style()
            .set_property(PLAY_STATE_PROPERTY, state.css_value());
    }

    fn detach(&self) {
        self.0.remove();
    }
}

/// Live observer registration; the callback must outlive the observer.
pub struct DomWatch {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

pub struct DomSurface {
    window: web::Window,
    document: web::Document,
    container: web::HtmlElement,
}

impl DomSurface {
    /// First element matching `selector`, or `None` if the page has none.
    pub fn locate(document: &web::Document, selector: &str) -> Option<Self> {
        let window = web::window()?;
        let found = match document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("[effect] bad selector '{}': {:?}", selector, e);
                None
            }
        };
        let Some(el) = found else {
            log::debug!("[effect] no element matches '{}'", selector);
            return None;
        };
        let container = el.dyn_into::<web::HtmlElement>().ok()?;
        Some(Self {
            window,
            document: document.clone(),
            container,
        })
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    fn create(&self, spec: &ElementSpec) -> Result<web::HtmlElement, JsValue> {
        let el = self
            .document
            .create_element(DECORATION_TAG)?
            .dyn_into::<web::HtmlElement>()
            .map_err(JsValue::from)?;
        el.set_class_name(spec.class());
        let style = el.style();
        for (property, value) in spec.styles.iter() {
            style.set_property(property, value)?;
        }
        if let Some(text) = spec.text {
            el.set_text_content(Some(text));
        }
        self.container.append_child(&el)?;
        Ok(el)
    }
}

impl Surface for DomSurface {
    type Element = DomDecoration;
    type Watch = Option<DomWatch>;

    fn spawn(&mut self, spec: &ElementSpec) -> Option<DomDecoration> {
        match self.create(spec) {
            Ok(el) => Some(DomDecoration(el)),
            Err(e) => {
                log::warn!("[effect] create .{} failed: {:?}", spec.class(), e);
                None
            }
        }
    }

    fn viewport_width(&self) -> f64 {
        dom::viewport_width(&self.window)
    }

    fn watch_visibility(
        &mut self,
        threshold: f64,
        mut on_change: VisibilityCallback,
    ) -> Option<DomWatch> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[effect] IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(&self.container);
        Some(DomWatch {
            observer,
            _callback: callback,
        })
    }

    fn unwatch(&mut self, watch: Option<DomWatch>) {
        if let Some(watch) = watch {
            watch.observer.disconnect();
        }
    }
}
