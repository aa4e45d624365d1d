//! Filter selection: two independent single-valued facets
//!
//! The selection is an immutable value. UI events are turned into
//! [`FilterAction`]s and folded in with [`FilterSelection::reduce`]; the
//! controls and item visibility are both derived from the result.

/// Value of the "no restriction" option in every facet control
pub const ALL: &str = "all";

/// One facet: either unrestricted or pinned to a single value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Build from a control value; empty and "all" mean no restriction
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL {
            Facet::All
        } else {
            Facet::Only(value.to_string())
        }
    }

    /// Value as written into `data-value` / hidden fields
    pub fn as_value(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Only(v) => v,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// An element attribute matches when the facet is unrestricted or equal.
    /// A missing attribute only matches `All`.
    pub fn matches(&self, attr: Option<&str>) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(v) => attr == Some(v.as_str()),
        }
    }
}

/// Which facet a control drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Status,
    Location,
}

impl FacetKind {
    /// Class of the hidden single-value field inside a `.custom-dropdown`
    pub fn field_class(&self) -> &'static str {
        match self {
            FacetKind::Status => "status-select",
            FacetKind::Location => "location-select",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// A status dropdown option was picked; "all" clears the facet
    SelectStatus(String),
    /// A status button was pressed; pressing the active one again turns it off
    ToggleStatus(String),
    /// A location option was picked; "all" clears the facet
    SelectLocation(String),
}

impl FilterAction {
    pub fn select(kind: FacetKind, value: impl Into<String>) -> Self {
        match kind {
            FacetKind::Status => FilterAction::SelectStatus(value.into()),
            FacetKind::Location => FilterAction::SelectLocation(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub status: Facet,
    pub location: Facet,
}

impl FilterSelection {
    pub fn new(status: Facet, location: Facet) -> Self {
        Self { status, location }
    }

    pub fn facet(&self, kind: FacetKind) -> &Facet {
        match kind {
            FacetKind::Status => &self.status,
            FacetKind::Location => &self.location,
        }
    }

    /// Fold one UI action into a new selection
    pub fn reduce(&self, action: FilterAction) -> Self {
        match action {
            FilterAction::SelectStatus(value) => Self {
                status: Facet::from_value(&value),
                location: self.location.clone(),
            },
            FilterAction::ToggleStatus(value) => {
                let picked = Facet::from_value(&value);
                let status = if !picked.is_all() && picked == self.status {
                    Facet::All
                } else {
                    picked
                };
                Self {
                    status,
                    location: self.location.clone(),
                }
            }
            FilterAction::SelectLocation(value) => Self {
                status: self.status.clone(),
                location: Facet::from_value(&value),
            },
        }
    }

    /// Both facets must match (conjunction)
    pub fn matches(&self, status: Option<&str>, location: Option<&str>) -> bool {
        self.status.matches(status) && self.location.matches(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(v: &str) -> Facet {
        Facet::Only(v.to_string())
    }

    #[test]
    fn test_default_is_all() {
        let selection = FilterSelection::default();
        assert!(selection.status.is_all());
        assert!(selection.location.is_all());
        assert_eq!(selection.status.as_value(), "all");
    }

    #[test]
    fn test_all_bypasses_location() {
        let selection = FilterSelection::default();
        assert!(selection.matches(Some("loved"), Some("queens")));
        assert!(selection.matches(Some("to-do"), None));
    }

    #[test]
    fn test_conjunction() {
        let selection = FilterSelection::new(only("loved"), only("brooklyn"));
        assert!(selection.matches(Some("loved"), Some("brooklyn")));
        assert!(!selection.matches(Some("loved"), Some("queens")));
        assert!(!selection.matches(Some("to-try"), Some("brooklyn")));
        assert!(!selection.matches(Some("loved"), None));
        assert!(!selection.matches(None, Some("brooklyn")));
    }

    #[test]
    fn test_status_button_toggles_off() {
        let selection = FilterSelection::default()
            .reduce(FilterAction::ToggleStatus("loved".into()));
        assert_eq!(selection.status, only("loved"));

        let selection = selection.reduce(FilterAction::ToggleStatus("loved".into()));
        assert!(selection.status.is_all());

        let selection = selection.reduce(FilterAction::ToggleStatus("all".into()));
        assert!(selection.status.is_all());
    }

    #[test]
    fn test_status_dropdown_reselect_keeps_value() {
        let picked = FilterAction::select(FacetKind::Status, "loved");
        let selection = FilterSelection::default()
            .reduce(picked.clone())
            .reduce(picked);
        assert_eq!(selection.status, only("loved"));

        let selection = selection.reduce(FilterAction::SelectStatus("all".into()));
        assert!(selection.status.is_all());
    }

    #[test]
    fn test_status_switch_keeps_location() {
        let selection = FilterSelection::new(only("loved"), only("queens"))
            .reduce(FilterAction::SelectStatus("to-try".into()));
        assert_eq!(selection, FilterSelection::new(only("to-try"), only("queens")));
    }

    #[test]
    fn test_location_select_and_clear() {
        let selection = FilterSelection::new(only("loved"), Facet::All)
            .reduce(FilterAction::select(FacetKind::Location, "the bronx"));
        assert_eq!(selection.location, only("the bronx"));

        // re-selecting a location keeps it
        let selection = selection.reduce(FilterAction::SelectLocation("the bronx".into()));
        assert_eq!(selection.location, only("the bronx"));

        let selection = selection.reduce(FilterAction::SelectLocation("all".into()));
        assert!(selection.location.is_all());
        assert_eq!(selection.status, only("loved"));
    }
}
