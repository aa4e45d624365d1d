use crate::shared::dom::{self, CLASS_HIDDEN, SPINNER, TABLE};
use contracts::enums::page_type::Layout;
use web_sys::{Element, Node};

/// Find the loading spinner next to `container`, creating it when absent.
///
/// Rows look for it around the whole table and insert it right after the
/// table; cards look in the container's parent and insert it before the
/// container.
pub fn find_or_create(container: &Element, layout: Layout) -> Option<Element> {
    match layout {
        Layout::Rows => {
            let table = container.closest(TABLE).ok().flatten()?;
            let parent = table.parent_element()?;
            if let Some(existing) = dom::query_in(&parent, SPINNER) {
                return Some(existing);
            }
            let spinner = create()?;
            parent
                .insert_before(&spinner, table.next_sibling().as_ref())
                .ok()?;
            Some(spinner)
        }
        Layout::Cards => {
            let parent = container.parent_element()?;
            if let Some(existing) = dom::query_in(&parent, SPINNER) {
                return Some(existing);
            }
            let spinner = create()?;
            let anchor: &Node = container;
            parent.insert_before(&spinner, Some(anchor)).ok()?;
            Some(spinner)
        }
    }
}

fn create() -> Option<Element> {
    let spinner = dom::document()?.create_element("div").ok()?;
    spinner.set_class_name(SPINNER.trim_start_matches('.'));
    Some(spinner)
}

pub fn set_visible(spinner: Option<&Element>, visible: bool) {
    if let Some(spinner) = spinner {
        dom::set_class(spinner, CLASS_HIDDEN, !visible);
    }
}
