//! Filter controller
//!
//! Holds the current [`FilterSelection`] in a signal, re-derives the controls
//! from it and re-applies visibility to every rendered card and row.

pub mod controls;

use crate::listing::extract;
use crate::shared::dom::{
    self, ATTR_LOCATION, ATTR_STATUS, CARD, CARDS_CONTAINER, CLASS_VISIBLE, EMPTY_STATE, ROW,
    TABLE,
};
use crate::shared::site_config::site_config;
use contracts::shared::filter::{FilterAction, FilterSelection};
use contracts::shared::visibility::{plan_visibility, ItemFacets, ItemKind, VisibilityPlan};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::{GetUntracked, RwSignal, Update};
use once_cell::sync::OnceCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

static SELECTION: OnceCell<RwSignal<FilterSelection>> = OnceCell::new();

/// True once [`initialize`] has run on this page
pub fn is_registered() -> bool {
    SELECTION.get().is_some()
}

pub fn current_selection() -> FilterSelection {
    SELECTION
        .get()
        .map(|s| s.get_untracked())
        .unwrap_or_default()
}

/// Set up the controller. Repeated calls re-annotate, re-sync and re-filter
/// but never add listeners.
pub fn initialize() {
    extract::annotate_locations();

    let mut first_call = false;
    let selection = *SELECTION.get_or_init(|| {
        first_call = true;
        RwSignal::new(FilterSelection::default())
    });

    if first_call {
        install_listeners();
        log::debug!("Filter controller initialized");
    }

    controls::sync_controls(&selection.get_untracked());

    if has_items() {
        reapply();
    }
}

/// Fold `action` into the selection, then refresh controls and visibility
pub fn dispatch(action: FilterAction) {
    let Some(selection) = SELECTION.get() else {
        return;
    };
    selection.update(|s| *s = s.reduce(action));
    let current = selection.get_untracked();
    log::debug!(
        "Filter: status={} location={}",
        current.status.as_value(),
        current.location.as_value()
    );
    controls::sync_controls(&current);
    reapply();
}

pub fn reapply_if_registered() {
    if is_registered() {
        reapply();
    }
}

fn has_items() -> bool {
    dom::query(CARD).is_some() || dom::query(ROW).is_some()
}

/// Current cards and rows with their facet attributes, freshly queried
fn collect_items() -> (Vec<Element>, Vec<ItemFacets>) {
    let cards = dom::query_all(CARD).into_iter().map(|el| (ItemKind::Card, el));
    let rows = dom::query_all(ROW).into_iter().map(|el| (ItemKind::Row, el));

    cards
        .chain(rows)
        .map(|(kind, el)| {
            let facets = ItemFacets::new(
                kind,
                el.get_attribute(ATTR_STATUS),
                el.get_attribute(ATTR_LOCATION),
            );
            (el, facets)
        })
        .unzip()
}

/// Apply the current selection to every rendered element
pub fn reapply() -> VisibilityPlan {
    let selection = current_selection();
    let (elements, facets) = collect_items();
    let plan = plan_visibility(&selection, &facets);

    for (element, shown) in elements.iter().zip(&plan.visible) {
        dom::set_displayed(element, *shown);
    }

    let show_empty = plan.show_empty_state();
    for message in dom::query_all(EMPTY_STATE) {
        dom::set_class(&message, CLASS_VISIBLE, show_empty);
    }

    if let Some(cards) = dom::query(CARDS_CONTAINER) {
        dom::set_displayed(&cards, !plan.hide_container(ItemKind::Card));
    }
    if let Some(table) = dom::query(TABLE) {
        dom::set_displayed(&table, !plan.hide_container(ItemKind::Row));
    }

    log::debug!(
        "Visible: {}/{} cards, {}/{} rows",
        plan.visible_cards,
        plan.total_cards,
        plan.visible_rows,
        plan.total_rows
    );
    plan
}

fn install_listeners() {
    let Some(document) = dom::document() else {
        return;
    };

    let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(action) = controls::handle_click(&event) {
            dispatch(action);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let on_rendered = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        initialize();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(site_config().render.settle_delay_ms).await;
            if has_items() {
                reapply();
            }
        });
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback(
        &site_config().events.completion_event,
        on_rendered.as_ref().unchecked_ref(),
    );
    on_rendered.forget();
}
