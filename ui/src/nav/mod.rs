//! Navigation state: which section is highlighted, whether the bar is in its
//! scrolled treatment, and whether the mobile menu is open.

pub mod section;
pub mod state;
pub mod tracker;
pub mod viewport;

pub use section::Section;
pub use state::{UiEvent, UiState};
pub use tracker::ScrollTracker;
pub use viewport::{DomViewport, LayoutProbe, ScrollDriver};
