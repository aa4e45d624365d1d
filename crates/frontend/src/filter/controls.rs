//! Filter controls: custom dropdowns and status buttons.
//!
//! One delegated `click` listener on the document handles every control, so
//! controls added after start-up work without rebinding.

use crate::shared::dom::{
    self, ATTR_VALUE, CLASS_ACTIVE, DROPDOWN, DROPDOWN_ACTIVE_FILTER, DROPDOWN_OPTION,
    DROPDOWN_TRIGGER, FILTER_TEXT, STATUS_BUTTON,
};
use contracts::shared::filter::{FacetKind, FilterAction, FilterSelection};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, Node};

/// Facet driven by a `.custom-dropdown`, decided by its hidden field
pub fn dropdown_kind(dropdown: &Element) -> Option<FacetKind> {
    [FacetKind::Status, FacetKind::Location]
        .into_iter()
        .find(|kind| dom::query_in(dropdown, &format!(".{}", kind.field_class())).is_some())
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

fn value_of(element: &Element) -> String {
    element.get_attribute(ATTR_VALUE).unwrap_or_default()
}

/// Translate a document click into at most one filter action
pub fn handle_click(event: &Event) -> Option<FilterAction> {
    let target = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok());
    let Some(target) = target else {
        close_dropdowns(None);
        return None;
    };

    // Option inside a dropdown
    if let Some(option) = closest(&target, DROPDOWN_OPTION) {
        if let Some(dropdown) = closest(&option, DROPDOWN) {
            close_dropdowns(None);
            return dropdown_kind(&dropdown).map(|kind| FilterAction::select(kind, value_of(&option)));
        }
    }

    // Trigger or active-filter box
    let toggle_selector = format!("{}, {}", DROPDOWN_TRIGGER, DROPDOWN_ACTIVE_FILTER);
    if let Some(toggle) = closest(&target, &toggle_selector) {
        if let Some(dropdown) = closest(&toggle, DROPDOWN) {
            let _ = dropdown.class_list().toggle(CLASS_ACTIVE);
            close_dropdowns(Some(&dropdown));
            return None;
        }
    }

    close_dropdowns(Some(&target));

    closest(&target, STATUS_BUTTON).map(|button| FilterAction::ToggleStatus(value_of(&button)))
}

/// Close every open dropdown that does not contain `keep`
fn close_dropdowns(keep: Option<&Element>) {
    for dropdown in dom::query_all(DROPDOWN) {
        let keep_open = keep.is_some_and(|el| {
            let node: &Node = el;
            dropdown.contains(Some(node))
        });
        if !keep_open {
            dom::set_class(&dropdown, CLASS_ACTIVE, false);
        }
    }
}

/// Make every control reflect `selection`
pub fn sync_controls(selection: &FilterSelection) {
    for dropdown in dom::query_all(DROPDOWN) {
        let Some(kind) = dropdown_kind(&dropdown) else {
            continue;
        };
        sync_dropdown(&dropdown, kind, selection.facet(kind).as_value());
    }

    let status = selection.status.as_value();
    for button in dom::query_all(STATUS_BUTTON) {
        dom::set_class(&button, CLASS_ACTIVE, value_of(&button) == status);
    }
}

fn sync_dropdown(dropdown: &Element, kind: FacetKind, value: &str) {
    if let Some(field) = dom::query_in(dropdown, &format!(".{}", kind.field_class())) {
        set_field_value(&field, value);
    }

    let mut label = None;
    for option in dom::query_all_in(dropdown, DROPDOWN_OPTION) {
        let active = value_of(&option) == value;
        dom::set_class(&option, CLASS_ACTIVE, active);
        if active && label.is_none() {
            label = Some(dom::text_of(&option));
        }
    }

    let Some(display) = dom::query_in(dropdown, DROPDOWN_ACTIVE_FILTER) else {
        return;
    };
    let label = label.unwrap_or_else(|| value.to_string());
    match dom::query_in(&display, FILTER_TEXT) {
        Some(text) => text.set_text_content(Some(&label)),
        None => display.set_text_content(Some(&label)),
    }
}

/// The hidden field is an `<input type="hidden">` or a `<select>`
fn set_field_value(field: &Element, value: &str) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else {
        let _ = field.set_attribute("value", value);
    }
}
