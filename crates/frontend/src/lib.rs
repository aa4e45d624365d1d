pub mod filter;
pub mod listing;
pub mod shared;

use crate::shared::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

/// Re-apply the current filter selection to every rendered card and row.
#[wasm_bindgen(js_name = filterItems)]
pub fn filter_items() {
    filter::reapply();
}

/// Set up filter controls; safe to call repeatedly.
#[wasm_bindgen(js_name = initializeFilters)]
pub fn initialize_filters() {
    filter::initialize();
}

/// Fetch `data/<pageType>.json` and render it into the page.
#[wasm_bindgen(js_name = loadAndRender)]
pub fn load_and_render(page_type: String) {
    listing::loader::load_and_render(&page_type);
}

fn on_dom_ready() {
    filter::initialize();

    let page_type = dom::document()
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(dom::ATTR_PAGE_TYPE));
    if let Some(page_type) = page_type {
        listing::loader::load_and_render(&page_type);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() != "loading" {
        on_dom_ready();
        return;
    }

    let on_ready = Closure::once(on_dom_ready);
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}
