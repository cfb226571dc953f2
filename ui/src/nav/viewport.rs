use leptos::leptos_dom::logging::console_warn;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use super::section::Section;

/// Read side of the page layout, as seen from the viewport.
pub trait LayoutProbe {
    /// Vertical scroll offset of the viewport, in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Top edge of the section's element relative to the viewport top.
    /// `None` when the element is not in the rendered tree.
    fn section_top(&self, section: Section) -> Option<f64>;
}

/// Write side: brings a section into view.
pub trait ScrollDriver {
    /// Returns false when there is no element to scroll to.
    fn scroll_into_view(&self, section: Section) -> bool;
}

/// The live browser window.
#[derive(Copy, Clone, Debug, Default)]
pub struct DomViewport;

impl DomViewport {
    fn element(section: Section) -> Option<Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(section.id())
    }
}

impl LayoutProbe for DomViewport {
    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn section_top(&self, section: Section) -> Option<f64> {
        Self::element(section).map(|el| el.get_bounding_client_rect().top())
    }
}

impl ScrollDriver for DomViewport {
    fn scroll_into_view(&self, section: Section) -> bool {
        let Some(el) = Self::element(section) else {
            console_warn(&format!("no element #{section} to scroll to"));
            return false;
        };

        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}
