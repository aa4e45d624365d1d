//! Location facet stamping over the live DOM.
//!
//! Safe to run any number of times: elements that already carry
//! `data-location` are skipped, so only freshly rendered items are touched.

use crate::shared::dom::{self, ATTR_LOCATION, CARD, CARD_TAG, ROW};
use contracts::shared::location::{card_location, row_location};
use web_sys::Element;

/// Annotate every card and row that lacks a location; returns how many were set
pub fn annotate_locations() -> usize {
    let cards = dom::query_all(CARD)
        .iter()
        .filter(|card| annotate(card, derive_card))
        .count();
    let rows = dom::query_all(ROW)
        .iter()
        .filter(|row| annotate(row, derive_row))
        .count();

    if cards + rows > 0 {
        log::debug!("Annotated locations: {} cards, {} rows", cards, rows);
    }
    cards + rows
}

fn annotate(element: &Element, derive: fn(&Element) -> Option<String>) -> bool {
    if element.has_attribute(ATTR_LOCATION) {
        return false;
    }
    match derive(element) {
        Some(location) => element.set_attribute(ATTR_LOCATION, &location).is_ok(),
        None => false,
    }
}

fn derive_card(card: &Element) -> Option<String> {
    let tags: Vec<String> = dom::query_all_in(card, CARD_TAG)
        .iter()
        .map(dom::text_of)
        .collect();
    card_location(tags.iter().map(String::as_str))
}

/// The borough is the first `td`; the name sits in `th[scope=row]`
fn derive_row(row: &Element) -> Option<String> {
    let cell = dom::query_in(row, "td")?;
    row_location(&dom::text_of(&cell))
}
