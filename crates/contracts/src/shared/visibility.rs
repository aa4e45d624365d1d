//! Visibility planning for rendered items
//!
//! The DOM side collects the facet attributes of every card and row, asks for
//! a [`VisibilityPlan`], then applies it. Keeping the decision here lets the
//! container and empty-state rules be tested without a browser.

use super::filter::FilterSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Card,
    Row,
}

/// Facet attributes read from one rendered element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFacets {
    pub kind: ItemKind,
    pub status: Option<String>,
    pub location: Option<String>,
}

impl ItemFacets {
    pub fn new(kind: ItemKind, status: Option<String>, location: Option<String>) -> Self {
        Self {
            kind,
            status,
            location,
        }
    }
}

/// Outcome of applying a selection to the current items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityPlan {
    /// Same order as the input items
    pub visible: Vec<bool>,
    pub total_cards: usize,
    pub total_rows: usize,
    pub visible_cards: usize,
    pub visible_rows: usize,
}

impl VisibilityPlan {
    pub fn total_visible(&self) -> usize {
        self.visible_cards + self.visible_rows
    }

    pub fn show_empty_state(&self) -> bool {
        self.total_visible() == 0
    }

    /// A container hides only when it has items and none of them survive
    pub fn hide_container(&self, kind: ItemKind) -> bool {
        let (total, visible) = match kind {
            ItemKind::Card => (self.total_cards, self.visible_cards),
            ItemKind::Row => (self.total_rows, self.visible_rows),
        };
        total > 0 && visible == 0
    }
}

pub fn plan_visibility(selection: &FilterSelection, items: &[ItemFacets]) -> VisibilityPlan {
    let mut plan = VisibilityPlan {
        visible: Vec::with_capacity(items.len()),
        ..Default::default()
    };

    for item in items {
        let shown = selection.matches(item.status.as_deref(), item.location.as_deref());
        plan.visible.push(shown);

        match item.kind {
            ItemKind::Card => {
                plan.total_cards += 1;
                if shown {
                    plan.visible_cards += 1;
                }
            }
            ItemKind::Row => {
                plan.total_rows += 1;
                if shown {
                    plan.visible_rows += 1;
                }
            }
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{Facet, FilterAction};

    fn card(status: &str, location: Option<&str>) -> ItemFacets {
        ItemFacets::new(
            ItemKind::Card,
            Some(status.to_string()),
            location.map(str::to_string),
        )
    }

    fn row(status: &str, location: &str) -> ItemFacets {
        ItemFacets::new(
            ItemKind::Row,
            Some(status.to_string()),
            Some(location.to_string()),
        )
    }

    #[test]
    fn test_all_shows_everything() {
        let items = vec![
            card("loved", Some("queens")),
            card("to-try", None),
            row("to-do", "brooklyn"),
        ];
        let plan = plan_visibility(&FilterSelection::default(), &items);
        assert_eq!(plan.visible, vec![true, true, true]);
        assert_eq!(plan.total_visible(), 3);
        assert!(!plan.show_empty_state());
    }

    #[test]
    fn test_status_all_only_checks_location() {
        let items = vec![
            card("loved", Some("queens")),
            card("to-try", Some("queens")),
            row("to-do", "brooklyn"),
        ];
        let selection = FilterSelection::new(Facet::All, Facet::from_value("queens"));
        let plan = plan_visibility(&selection, &items);
        assert_eq!(plan.visible, vec![true, true, false]);
    }

    #[test]
    fn test_both_facets_required() {
        let items = vec![
            card("loved", Some("brooklyn")),
            card("loved", Some("queens")),
            card("to-try", Some("brooklyn")),
            card("loved", None),
        ];
        let selection = FilterSelection::default()
            .reduce(FilterAction::SelectStatus("loved".into()))
            .reduce(FilterAction::SelectLocation("brooklyn".into()));
        let plan = plan_visibility(&selection, &items);
        assert_eq!(plan.visible, vec![true, false, false, false]);
        assert_eq!(plan.visible_cards, 1);
    }

    #[test]
    fn test_cards_container_hides_when_filtered_out() {
        let items = vec![
            card("loved", Some("manhattan")),
            card("loved", Some("queens")),
            card("to-do", Some("brooklyn")),
        ];
        let selection = FilterSelection::default().reduce(FilterAction::SelectStatus("to-try".into()));
        let plan = plan_visibility(&selection, &items);
        assert_eq!(plan.total_visible(), 0);
        assert!(plan.show_empty_state());
        assert!(plan.hide_container(ItemKind::Card));
        // no rows on this page: the rows container stays as it is
        assert!(!plan.hide_container(ItemKind::Row));
    }

    #[test]
    fn test_rows_container_hides_independently() {
        let items = vec![row("loved", "queens"), row("to-try", "the bronx")];
        let selection =
            FilterSelection::default().reduce(FilterAction::SelectLocation("manhattan".into()));
        let plan = plan_visibility(&selection, &items);
        assert_eq!(plan.total_cards, 0);
        assert!(!plan.hide_container(ItemKind::Card));
        assert!(plan.hide_container(ItemKind::Row));
    }

    #[test]
    fn test_mixed_page_keeps_matching_container() {
        let items = vec![card("loved", Some("queens")), row("to-try", "queens")];
        let selection = FilterSelection::default().reduce(FilterAction::SelectStatus("loved".into()));
        let plan = plan_visibility(&selection, &items);
        assert!(!plan.hide_container(ItemKind::Card));
        assert!(plan.hide_container(ItemKind::Row));
        assert!(!plan.show_empty_state());
    }

    #[test]
    fn test_no_items() {
        let plan = plan_visibility(&FilterSelection::default(), &[]);
        assert!(plan.show_empty_state());
        assert!(!plan.hide_container(ItemKind::Card));
        assert!(!plan.hide_container(ItemKind::Row));
    }
}
