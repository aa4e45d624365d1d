//! Small DOM helpers shared by the loader and the filter controller.
//!
//! Every lookup is optional: a page that lacks an element simply skips the
//! work that needs it.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

// ── Selectors of the page contract ──────────────────────────────────────────

pub const CARD: &str = ".card";
pub const CARD_TAG: &str = ".card__tags .tag";
pub const ROW: &str = "tr[data-status]";
pub const CARDS_CONTAINER: &str = ".cards";
pub const TABLE: &str = ".work-table";
pub const EMPTY_STATE: &str = ".empty-state-message";
pub const SPINNER: &str = ".loading-spinner";
pub const DROPDOWN: &str = ".custom-dropdown";
pub const DROPDOWN_TRIGGER: &str = ".dropdown-trigger";
pub const DROPDOWN_ACTIVE_FILTER: &str = ".dropdown-active-filter";
pub const DROPDOWN_OPTION: &str = ".dropdown-option";
pub const FILTER_TEXT: &str = ".filter-text";
pub const STATUS_BUTTON: &str = ".filter-btn-status";

pub const ATTR_STATUS: &str = "data-status";
pub const ATTR_LOCATION: &str = "data-location";
pub const ATTR_VALUE: &str = "data-value";
pub const ATTR_PAGE_TYPE: &str = "data-page-type";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_VISIBLE: &str = "visible";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// All elements matching `selector` under `root`, in document order
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(_) => Vec::new(),
    }
}

/// All elements matching `selector` in the current document
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    match document.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(_) => Vec::new(),
    }
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Trimmed text content
pub fn text_of(element: &Element) -> String {
    element
        .text_content()
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

/// `style.display = ""` when shown, `"none"` when hidden
pub fn set_displayed(element: &Element, shown: bool) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    if shown {
        let _ = style.remove_property("display");
    } else {
        let _ = style.set_property("display", "none");
    }
}

pub fn is_displayed(element: &Element) -> bool {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value("display").ok())
        .map(|display| display != "none")
        .unwrap_or(true)
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let _ = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Swap the container between its `loading` and `loaded` markers
pub fn set_loading_marker(element: &Element, marker: Option<&str>) {
    match marker {
        Some("loading") => {
            set_class(element, "loaded", false);
            set_class(element, "loading", true);
        }
        Some("loaded") => {
            set_class(element, "loading", false);
            set_class(element, "loaded", true);
        }
        _ => {
            set_class(element, "loading", false);
            set_class(element, "loaded", false);
        }
    }
}
