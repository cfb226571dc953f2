use super::section::Section;
use super::state::UiState;
use super::viewport::LayoutProbe;

/// Offset past which the nav bar switches to its solid treatment.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// A section is "in view" while its top sits in `[ACTIVE_BAND_TOP, ACTIVE_BAND_BOTTOM)`.
pub const ACTIVE_BAND_TOP: f64 = -100.0;
pub const ACTIVE_BAND_BOTTOM: f64 = 300.0;

/// Derives `scrolled` and `active_section` from the layout on each scroll tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    pub threshold: f64,
    pub band_top: f64,
    pub band_bottom: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            threshold: SCROLLED_THRESHOLD,
            band_top: ACTIVE_BAND_TOP,
            band_bottom: ACTIVE_BAND_BOTTOM,
        }
    }
}

impl ScrollTracker {
    /// Strictly greater than the threshold, no hysteresis.
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }

    pub fn in_band(&self, top: f64) -> bool {
        top >= self.band_top && top < self.band_bottom
    }

    /// First section, in declared order, whose top is inside the band.
    /// Sections without an element are skipped.
    pub fn active_section(&self, probe: &impl LayoutProbe) -> Option<Section> {
        Section::ALL.into_iter().find(|&section| {
            probe
                .section_top(section)
                .is_some_and(|top| self.in_band(top))
        })
    }

    /// One scroll tick. Keeps the previous active section when nothing matches.
    pub fn recompute(&self, mut state: UiState, probe: &impl LayoutProbe) -> UiState {
        state.set_scrolled(self.is_scrolled(probe.scroll_y()));
        if let Some(section) = self.active_section(probe) {
            state.set_active_section(section);
        }
        state
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::nav::viewport::ScrollDriver;

    /// Synthetic layout: an offset plus per-section tops. Records scroll requests.
    #[derive(Default)]
    pub(crate) struct FakeViewport {
        pub scroll_y: f64,
        pub tops: HashMap<Section, f64>,
        pub scrolled_to: RefCell<Vec<Section>>,
    }

    impl FakeViewport {
        pub fn at(scroll_y: f64, tops: &[(Section, f64)]) -> Self {
            Self {
                scroll_y,
                tops: tops.iter().copied().collect(),
                scrolled_to: RefCell::default(),
            }
        }

        /// Every section present, laid out 800px apart from `home_top`.
        pub fn full_page(scroll_y: f64, home_top: f64) -> Self {
            let tops = Section::ALL
                .iter()
                .enumerate()
                .map(|(i, &s)| (s, home_top + 800.0 * i as f64))
                .collect::<Vec<_>>();
            Self::at(scroll_y, &tops)
        }
    }

    impl LayoutProbe for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn section_top(&self, section: Section) -> Option<f64> {
            self.tops.get(&section).copied()
        }
    }

    impl ScrollDriver for FakeViewport {
        fn scroll_into_view(&self, section: Section) -> bool {
            if !self.tops.contains_key(&section) {
                return false;
            }
            self.scrolled_to.borrow_mut().push(section);
            true
        }
    }

    #[test]
    fn scrolled_flips_exactly_past_fifty() {
        let t = ScrollTracker::default();
        assert!(!t.is_scrolled(0.0));
        assert!(!t.is_scrolled(50.0));
        assert!(t.is_scrolled(51.0));
        assert!(t.is_scrolled(50.5));

        let up = t.recompute(UiState::default(), &FakeViewport::at(400.0, &[]));
        assert!(up.scrolled);
        let down = t.recompute(up, &FakeViewport::at(50.0, &[]));
        assert!(!down.scrolled);
    }

    #[test]
    fn band_is_half_open() {
        let t = ScrollTracker::default();
        assert!(t.in_band(-100.0));
        assert!(!t.in_band(-100.5));
        assert!(t.in_band(299.9));
        assert!(!t.in_band(300.0));
    }

    #[test]
    fn lone_section_in_band_becomes_active() {
        let t = ScrollTracker::default();
        for target in Section::ALL {
            let tops = Section::ALL
                .iter()
                .map(|&s| (s, if s == target { 120.0 } else { 2000.0 }))
                .collect::<Vec<_>>();
            let next = t.recompute(UiState::default(), &FakeViewport::at(900.0, &tops));
            assert_eq!(next.active_section, target);
        }
    }

    #[test]
    fn earlier_section_wins_ties() {
        let t = ScrollTracker::default();
        let probe = FakeViewport::at(
            1200.0,
            &[
                (Section::Home, -900.0),
                (Section::About, 0.0),
                (Section::Experience, 10.0),
            ],
        );
        assert_eq!(t.active_section(&probe), Some(Section::About));

        let both = FakeViewport::at(0.0, &[(Section::Home, 0.0), (Section::About, 250.0)]);
        assert_eq!(t.active_section(&both), Some(Section::Home));
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let t = ScrollTracker::default();
        let mut state = UiState::default();
        state.set_active_section(Section::Skills);

        let probe = FakeViewport::at(3000.0, &[(Section::Projects, -600.0), (Section::Contact, 450.0)]);
        let next = t.recompute(state, &probe);
        assert_eq!(next.active_section, Section::Skills);
        assert!(next.scrolled);
    }

    #[test]
    fn missing_elements_are_skipped() {
        let t = ScrollTracker::default();
        let probe = FakeViewport::at(10.0, &[(Section::Skills, 40.0)]);
        assert_eq!(t.active_section(&probe), Some(Section::Skills));
        assert_eq!(t.active_section(&FakeViewport::default()), None);
    }

    #[test]
    fn scrolling_down_a_full_page_walks_the_sections() {
        let t = ScrollTracker::default();
        let mut state = UiState::default();
        let mut visited = Vec::new();
        for step in 0..=50 {
            let y = step as f64 * 100.0;
            state = t.recompute(state, &FakeViewport::full_page(y, -y));
            if visited.last() != Some(&state.active_section) {
                visited.push(state.active_section);
            }
        }
        assert_eq!(visited, Section::ALL.to_vec());
    }
}
