use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::scroll::SectionCandidate;

pub const SECTION_SELECTOR: &str = "section[id]";
/// Sections carrying this attribute are not snap targets (the footer).
pub const SNAP_SKIP_ATTR: &str = "data-snap-skip";
/// Subtrees carrying this attribute keep native wheel/key behaviour.
pub const NO_SNAP_ATTR: &str = "data-no-snap";
const FORM_SELECTOR: &str = "form, input, textarea, select, [contenteditable=\"true\"]";

pub fn collect_sections(document: &Document) -> Vec<SectionCandidate> {
    let Ok(nodes) = document.query_selector_all(SECTION_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionCandidate {
            id: section.id(),
            offset: f64::from(section.offset_top()),
            skip: section.has_attribute(SNAP_SKIP_ATTR),
        })
        .collect()
}

/// True when `target` is inside a region that scrolls or types on its own:
/// a `data-no-snap` subtree, a form control, or an ancestor with its own
/// vertical overflow.
pub fn in_opt_out_zone(window: &Window, target: Option<EventTarget>) -> bool {
    let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    if matches!(element.closest(&format!("[{}]", NO_SNAP_ATTR)), Ok(Some(_))) {
        return true;
    }
    if matches!(element.closest(FORM_SELECTOR), Ok(Some(_))) {
        return true;
    }
    has_scrollable_ancestor(window, &element)
}

fn has_scrollable_ancestor(window: &Window, element: &Element) -> bool {
    let document = window.document();
    let root = document.as_ref().and_then(|d| d.document_element());
    let body: Option<Element> = document.as_ref().and_then(|d| d.body()).map(Into::into);

    let mut current = Some(element.clone());
    while let Some(el) = current {
        if Some(&el) == root.as_ref() || Some(&el) == body.as_ref() {
            return false;
        }
        if let Ok(Some(style)) = window.get_computed_style(&el) {
            let overflow = style.get_property_value("overflow-y").unwrap_or_default();
            if (overflow == "auto" || overflow == "scroll") && el.scroll_height() > el.client_height() {
                return true;
            }
        }
        current = el.parent_element();
    }
    false
}

/// Native smooth scroll to an element by id; the fallback whenever the snap
/// controller is not installed.
pub fn scroll_into_view(document: &Document, id: &str, smooth: bool) -> bool {
    let Some(element) = document.get_element_by_id(id) else {
        log::warn!("no element with id `{}` to scroll to", id);
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_block(ScrollLogicalPosition::Start);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Reduced-motion preference of the current window; false when there is none.
pub fn reduced_motion() -> bool {
    web_sys::window().map_or(false, |window| crate::scroll::surface::prefers_reduced_motion(&window))
}
