//! Data loader: fetch → render → annotate → signal.

use super::render::{render_collection, RenderStrategy};
use super::{extract, spinner};
use crate::filter;
use crate::shared::dom;
use crate::shared::site_config::site_config;
use contracts::domain::entry::EntriesDocument;
use contracts::enums::page_type::{Layout, PageType};
use contracts::shared::errors::LoadError;
use contracts::shared::load_phase::{LoadGenerations, LoadPhase, LoadTicket};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use std::cell::RefCell;
use web_sys::{CustomEvent, CustomEventInit, Element};

thread_local! {
    static GENERATIONS: RefCell<LoadGenerations> = RefCell::new(LoadGenerations::default());
}

/// Payload of the completion event (`event.detail`)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionDetail {
    pub page_type: String,
}

/// Start loading `page_type` in the background; unknown types are logged and ignored
pub fn load_and_render(page_type: &str) {
    let Some(page) = PageType::from_code(page_type) else {
        log::error!("{}", LoadError::UnknownPageType(page_type.to_string()));
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = load_page(page).await {
            log::error!("Error loading data: {}", e);
        }
    });
}

/// Elements one invocation works on
struct LoadRun {
    ticket: LoadTicket,
    phase: LoadPhase,
    container: Option<Element>,
    spinner: Option<Element>,
}

impl LoadRun {
    fn enter(&mut self, phase: LoadPhase) {
        log::debug!(
            "[{} #{}] {:?} -> {:?}",
            self.ticket.page,
            self.ticket.generation,
            self.phase,
            phase
        );
        self.phase = phase;
        if let Some(container) = &self.container {
            dom::set_loading_marker(container, phase.container_marker());
        }
        spinner::set_visible(self.spinner.as_ref(), phase.spinner_visible());
    }

    fn advance(&mut self) {
        if let Some(next) = self.phase.next() {
            self.enter(next);
        }
    }

    /// A superseded run leaves the container and spinner to the newer one
    fn fail(&mut self) {
        if self.phase.can_fail() && self.is_current() {
            self.enter(LoadPhase::Failed);
        }
    }

    fn is_current(&self) -> bool {
        let current = ticket_is_current(&self.ticket);
        if !current {
            log::debug!(
                "[{} #{}] superseded by a newer load, stopping",
                self.ticket.page,
                self.ticket.generation
            );
        }
        current
    }
}

fn ticket_is_current(ticket: &LoadTicket) -> bool {
    GENERATIONS.with(|g| g.borrow().is_current(ticket))
}

/// Run one full load cycle for `page`
pub async fn load_page(page: PageType) -> Result<(), LoadError> {
    let config = site_config();
    let layout = page.layout();
    let ticket = GENERATIONS.with(|g| g.borrow_mut().begin(page));

    let container = dom::query(layout.container_selector());
    let spinner = container
        .as_ref()
        .and_then(|c| spinner::find_or_create(c, layout));

    let mut run = LoadRun {
        ticket,
        phase: LoadPhase::Idle,
        container,
        spinner,
    };
    run.advance();

    let path = page.data_path(&config.data_dir);
    let document = match fetch_entries(&path).await {
        Ok(document) => document,
        Err(e) => {
            run.fail();
            return Err(e);
        }
    };
    if !run.is_current() {
        return Ok(());
    }

    run.advance();
    warn_missing_facets(layout, &document);
    if let Some(container) = run.container.clone() {
        let strategy = RenderStrategy::from_config(&config.render);
        let ticket = run.ticket;
        let count = render_collection(&container, layout, &document, strategy, || {
            ticket_is_current(&ticket)
        })
        .await;
        log::debug!("Rendered {} {} entries", count, page);
    }
    if !run.is_current() {
        return Ok(());
    }

    run.advance();
    extract::annotate_locations();

    run.advance();
    TimeoutFuture::new(config.render.settle_delay_ms).await;
    broadcast_completion(page, &config.events.completion_event);
    filter::reapply_if_registered();

    Ok(())
}

async fn fetch_entries(path: &str) -> Result<EntriesDocument, LoadError> {
    let network = |e: gloo_net::Error| LoadError::Network {
        path: path.to_string(),
        message: e.to_string(),
    };

    let response = Request::get(path).send().await.map_err(network)?;
    if !response.ok() {
        return Err(LoadError::Http {
            path: path.to_string(),
            status: response.status(),
        });
    }

    let text = response.text().await.map_err(network)?;
    EntriesDocument::from_json(&text).map_err(|e| LoadError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Entries that will end up without a location facet
fn warn_missing_facets(layout: Layout, document: &EntriesDocument) {
    for entry in &document.entries {
        match layout {
            Layout::Cards if entry.tags.is_none() => {
                log::warn!("Card \"{}\" has no tags, location filter will skip it", entry.card_title());
            }
            Layout::Rows if entry.borough_or_location().is_none() => {
                log::warn!("Row \"{}\" has no borough, location filter will skip it", entry.row_name());
            }
            _ => {}
        }
    }
}

fn broadcast_completion(page: PageType, event_name: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    let detail = CompletionDetail {
        page_type: page.code().to_string(),
    };

    let init = CustomEventInit::new();
    match serde_wasm_bindgen::to_value(&detail) {
        Ok(value) => init.set_detail(&value),
        Err(e) => log::warn!("Completion detail not serialized: {}", e),
    }

    match CustomEvent::new_with_event_init_dict(event_name, &init) {
        Ok(event) => {
            let _ = document.dispatch_event(&event);
        }
        Err(e) => log::error!("Failed to create {} event: {:?}", event_name, e),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn detached_div() -> Element {
        dom::document().unwrap().create_element("div").unwrap()
    }

    fn loading_run(ticket: LoadTicket) -> LoadRun {
        let mut run = LoadRun {
            ticket,
            phase: LoadPhase::Idle,
            container: Some(detached_div()),
            spinner: Some(detached_div()),
        };
        run.advance();
        run
    }

    #[wasm_bindgen_test]
    fn superseded_failure_leaves_container_and_spinner() {
        let older = GENERATIONS.with(|g| g.borrow_mut().begin(PageType::Sightseeing));
        let mut stale = loading_run(older);
        let newer = GENERATIONS.with(|g| g.borrow_mut().begin(PageType::Sightseeing));
        let mut current = loading_run(newer);

        stale.fail();
        assert_eq!(stale.phase, LoadPhase::Loading);
        let container = stale.container.as_ref().unwrap();
        assert!(dom::has_class(container, "loading"));
        assert!(!dom::has_class(container, "loaded"));
        assert!(!dom::has_class(stale.spinner.as_ref().unwrap(), "hidden"));

        current.fail();
        assert_eq!(current.phase, LoadPhase::Failed);
        assert!(dom::has_class(current.container.as_ref().unwrap(), "loaded"));
        assert!(dom::has_class(current.spinner.as_ref().unwrap(), "hidden"));
    }
}
