#![cfg(target_arch = "wasm32")]
use festive_core::{
    ActivationSignals, EffectController, EffectOptions, EffectSwitch, RngSource,
    DEFAULT_CONTAINER_SELECTOR, QUERY_KEY,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod api;
mod constants;
mod dom;
mod storage;
mod surface;
mod toggle;

pub use api::FestiveEffect;
use storage::LocalFlagStore;
use surface::DomSurface;

/// The page's single effect slot, shared by the bootstrap, the resize
/// listener and the toggle button.
pub(crate) type PageSwitch = Rc<RefCell<EffectSwitch<DomSurface, LocalFlagStore>>>;

/// Controller bound to the default header with default options.
pub(crate) fn spawn_page_effect(document: &web::Document) -> EffectController<DomSurface> {
    EffectController::new(
        DomSurface::locate(document, DEFAULT_CONTAINER_SELECTOR),
        EffectOptions::default(),
        RngSource::from_entropy(),
    )
}

fn wire_viewport_resize(window: &web::Window, switch: &PageSwitch) {
    let switch = switch.clone();
    dom::add_resize_listener(window, move |width| {
        if let Some(effect) = switch.borrow_mut().effect_mut() {
            effect.refresh_viewport(width);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("festive-header starting");

    dom::on_dom_ready(|| {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let store = LocalFlagStore::open(&window);
    let query = dom::search_param(&dom::location_search(&window), QUERY_KEY);
    let signals = ActivationSignals::new(dom::current_month(), query, &store);

    let switch: PageSwitch = Rc::new(RefCell::new(EffectSwitch::new(store)));
    if signals.should_activate() {
        log::info!(
            "[bootstrap] activating (december={}, forced={})",
            signals.is_december(),
            signals.is_forced()
        );
        switch.borrow_mut().install(spawn_page_effect(&document));
    }

    wire_viewport_resize(&window, &switch);
    toggle::mount(&document, switch)?;
    Ok(())
}
