use super::section::Section;
use super::tracker::ScrollTracker;
use super::viewport::{LayoutProbe, ScrollDriver};

/// Page-session UI flags. Only mutated through the transitions below.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub active_section: Section,
}

/// Discrete things that can happen to the page.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Scroll,
    ToggleMenu,
    Navigate(Section),
}

impl UiState {
    pub fn set_scrolled(&mut self, scrolled: bool) {
        self.scrolled = scrolled;
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Smooth-scrolls to `section` and closes the menu. A missing target is a no-op.
    pub fn scroll_to_section(&mut self, section: Section, driver: &impl ScrollDriver) -> bool {
        if !driver.scroll_into_view(section) {
            return false;
        }
        self.close_menu();
        true
    }

    /// Single step of the page's event loop.
    pub fn apply<V>(self, event: UiEvent, tracker: &ScrollTracker, viewport: &V) -> UiState
    where
        V: LayoutProbe + ScrollDriver,
    {
        let mut next = self;
        match event {
            UiEvent::Scroll => return tracker.recompute(next, viewport),
            UiEvent::ToggleMenu => next.toggle_menu(),
            UiEvent::Navigate(section) => {
                next.scroll_to_section(section, viewport);
            }
        }
        next
    }
}
