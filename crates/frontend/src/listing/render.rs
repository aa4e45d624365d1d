use super::images::wait_for_images;
use crate::shared::dom;
use contracts::domain::entry::EntriesDocument;
use contracts::enums::page_type::Layout;
use contracts::shared::config::RenderConfig;
use contracts::shared::templates::render_entries;
use web_sys::Element;

/// How the collection renderer decides it is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Done as soon as the markup is injected
    Immediate,
    /// Done when every image has settled or hit its timeout
    AwaitImages { timeout_ms: u32 },
}

impl RenderStrategy {
    pub fn from_config(config: &RenderConfig) -> Self {
        if config.wait_for_images {
            RenderStrategy::AwaitImages {
                timeout_ms: config.image_timeout_ms,
            }
        } else {
            RenderStrategy::Immediate
        }
    }
}

/// Replace the whole content of `container` with the rendered entries.
///
/// Returns the number of rendered entries. An empty document leaves the
/// container empty. When `is_current` turns false while images are pending,
/// the container is left to the newer render.
pub async fn render_collection(
    container: &Element,
    layout: Layout,
    document: &EntriesDocument,
    strategy: RenderStrategy,
    is_current: impl Fn() -> bool,
) -> usize {
    if document.is_empty() {
        container.set_inner_html("");
        dom::set_loading_marker(container, Some("loaded"));
        return 0;
    }

    dom::set_loading_marker(container, Some("loading"));

    container.set_inner_html(&render_entries(layout, &document.entries));

    if let RenderStrategy::AwaitImages { timeout_ms } = strategy {
        let report = wait_for_images(container, timeout_ms).await;
        if report.total > 0 {
            log::debug!(
                "Images: {} total, {} cached, {} settled, {} timed out",
                report.total,
                report.already_complete,
                report.settled,
                report.timed_out
            );
        }
    }

    if is_current() {
        dom::set_loading_marker(container, Some("loaded"));
    }
    document.entries.len()
}
