//! Lifecycle of one data-loader invocation
//!
//! ```text
//! Idle -> Loading -> Rendering -> Annotating -> Done
//!            \           \
//!             +-----------+--> Failed
//! ```

use crate::enums::page_type::PageType;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Rendering,
    Annotating,
    Done,
    Failed,
}

impl LoadPhase {
    /// Next phase on the success path
    pub fn next(self) -> Option<LoadPhase> {
        match self {
            LoadPhase::Idle => Some(LoadPhase::Loading),
            LoadPhase::Loading => Some(LoadPhase::Rendering),
            LoadPhase::Rendering => Some(LoadPhase::Annotating),
            LoadPhase::Annotating => Some(LoadPhase::Done),
            LoadPhase::Done | LoadPhase::Failed => None,
        }
    }

    /// Fetch and parse failures are only possible while loading or rendering
    pub fn can_fail(self) -> bool {
        matches!(self, LoadPhase::Loading | LoadPhase::Rendering)
    }

    /// Class the container carries in this phase
    pub fn container_marker(self) -> Option<&'static str> {
        match self {
            LoadPhase::Idle => None,
            LoadPhase::Loading | LoadPhase::Rendering => Some("loading"),
            LoadPhase::Annotating | LoadPhase::Done | LoadPhase::Failed => Some("loaded"),
        }
    }

    pub fn spinner_visible(self) -> bool {
        matches!(self, LoadPhase::Loading | LoadPhase::Rendering)
    }
}

/// Ticket handed to one loader invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub page: PageType,
    pub generation: u64,
}

/// Per-page generation counters; only the newest invocation may render
#[derive(Debug, Default)]
pub struct LoadGenerations {
    latest: HashMap<PageType, u64>,
}

impl LoadGenerations {
    pub fn begin(&mut self, page: PageType) -> LoadTicket {
        let generation = self.latest.entry(page).or_insert(0);
        *generation += 1;
        LoadTicket {
            page,
            generation: *generation,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.latest.get(&ticket.page) == Some(&ticket.generation)
    }
}
