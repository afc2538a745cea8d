//! Script-facing handle for pages that drive the effect by hand:
//!
//! ```js
//! const fx = new FestiveEffect("header.hero", { particles: 80, intensity: "high" });
//! fx.setIntensity("low");
//! fx.toggle(false);
//! ```

use crate::dom;
use crate::surface::DomSurface;
use festive_core::{
    EffectConfig, EffectController, EffectOptions, Intensity, RngSource,
    DEFAULT_CONTAINER_SELECTOR,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct FestiveEffect {
    inner: EffectController<DomSurface>,
}

#[wasm_bindgen]
impl FestiveEffect {
    /// Bind to the first element matching `selector` (default
    /// `header.hero`). A missing element leaves the handle inert.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: Option<String>, options: JsValue) -> FestiveEffect {
        let selector = selector.as_deref().unwrap_or(DEFAULT_CONTAINER_SELECTOR);
        let surface = dom::window_document().and_then(|d| DomSurface::locate(&d, selector));
        let config = config_from_js(&options);
        FestiveEffect {
            inner: EffectController::with_config(surface, config, RngSource::from_entropy()),
        }
    }

    pub fn toggle(&mut self, enabled: bool) {
        self.inner.toggle(enabled);
    }

    #[wasm_bindgen(js_name = setIntensity)]
    pub fn set_intensity(&mut self, level: &str) {
        self.inner.set_intensity(Intensity::parse_or_default(level));
    }

    pub fn rebuild(&mut self) {
        self.inner.rebuild();
    }

    pub fn destroy(&mut self) {
        self.inner.deactivate();
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.inner.particle_count()
    }

    #[wasm_bindgen(js_name = lightCount)]
    pub fn light_count(&self) -> usize {
        self.inner.light_count()
    }

    pub fn intensity(&self) -> String {
        self.inner.config().intensity.to_string()
    }
}

/// Options object -> config. Malformed fields are logged and fall back to
/// their defaults one by one; construction never throws.
fn config_from_js(options: &JsValue) -> EffectConfig {
    let options = if options.is_undefined() || options.is_null() {
        EffectOptions::default()
    } else {
        let json = js_sys::JSON::stringify(options)
            .map(String::from)
            .unwrap_or_default();
        match EffectOptions::from_json_lenient(&json) {
            Ok(o) => o,
            Err(e) => {
                log::error!("[effect] {}; using defaults", e);
                EffectOptions::default()
            }
        }
    };
    let config = EffectConfig::from_options(options);
    if let Err(e) = config.validate() {
        log::warn!("[effect] {}; clamping", e);
        return config.clamped();
    }
    config
}
