use crate::constants::{TOGGLE_BUTTON_CLASS, TOGGLE_BUTTON_ID, TOGGLE_BUTTON_TITLE};
use crate::{dom, spawn_page_effect, PageSwitch};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach the toggle button to `<body>`, reusing one the page already has.
/// Its glyph always reflects whether a controller exists.
pub fn mount(document: &web::Document, switch: PageSwitch) -> anyhow::Result<web::HtmlElement> {
    let button = match document.get_element_by_id(TOGGLE_BUTTON_ID) {
        Some(existing) => existing
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not an HTML element: {:?}", TOGGLE_BUTTON_ID, e))?,
        None => create_button(document)?,
    };
    set_glyph(&button, switch.borrow().glyph());

    let doc = document.clone();
    let button_for_click = button.clone();
    dom::add_click_listener(&button, move || {
        let glyph = {
            let mut sw = switch.borrow_mut();
            sw.flip(|| spawn_page_effect(&doc));
            sw.glyph()
        };
        set_glyph(&button_for_click, glyph);
    });
    Ok(button)
}

fn create_button(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let button = document
        .create_element("button")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    button.set_id(TOGGLE_BUTTON_ID);
    button.set_class_name(TOGGLE_BUTTON_CLASS);
    button.set_title(TOGGLE_BUTTON_TITLE);
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;
    body.append_child(&button)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(button)
}

#[inline]
fn set_glyph(button: &web::HtmlElement, glyph: &str) {
    button.set_text_content(Some(glyph));
}
