use leptos::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    Terminal,
    Cloud,
    Server,
    Code,
    ChevronDown,
    Menu,
    Close,
    GraduationCap,
    MapPin,
    TrendingUp,
    LineChart,
}

impl Icon {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 \
                 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 \
                 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
            Icon::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
            Icon::Server => &[
                "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
                "M6 6h.01",
                "M6 18h.01",
            ],
            Icon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::GraduationCap => &["M22 10v6M2 10l10-5 10 5-10 5z", "M6 12v5c3 3 9 3 12 0v-5"],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Icon::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Icon::LineChart => &["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
        }
    }
}

#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] classes: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
            aria-hidden="true"
        >
            { icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view() }
        </svg>
    }
}
