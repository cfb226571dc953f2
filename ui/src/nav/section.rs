use std::fmt;

/// Scrollable regions of the page, in document order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Declared order. The tracker scans in this order, so earlier entries win ties.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM element id backing the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Start",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Stack",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_round_trip() {
        let mut seen = std::collections::HashSet::new();
        for s in Section::ALL {
            assert!(seen.insert(s.id()));
            assert_eq!(Section::from_id(s.id()), Some(s));
        }
        assert_eq!(Section::from_id("blog"), None);
    }

    #[test]
    fn declared_order_starts_at_home() {
        assert_eq!(Section::ALL.first(), Some(&Section::Home));
        assert_eq!(Section::ALL.last(), Some(&Section::Contact));
        assert_eq!(Section::default(), Section::Home);
    }
}
