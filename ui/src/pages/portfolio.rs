use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};

use crate::components::{
    about::About, contact::Contact, experience::Experience, hero::Hero, navbar::NavBar,
    projects::Projects, skills::Skills,
};
use crate::nav::{DomViewport, ScrollTracker, UiEvent, UiState};

/// Markup for a given UI state. No DOM access; interactions go out through `on_event`.
#[component]
pub fn PortfolioView(#[prop(into)] state: Signal<UiState>, on_event: Callback<UiEvent>) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 text-slate-200 font-sans selection:bg-cyan-500/30">
            <NavBar state on_event />
            <Hero/>
            <About/>
            <Experience/>
            <Projects/>
            <Skills/>
            <Contact/>
        </div>
    }
}

/// Owns the page state and wires it to the browser window.
#[component]
pub fn Portfolio() -> impl IntoView {
    let state = RwSignal::new(UiState::default());
    let tracker = ScrollTracker::default();

    let on_event = Callback::new(move |event: UiEvent| {
        let current = state.get_untracked();
        let next = current.apply(event, &tracker, &DomViewport);
        if next != current {
            state.set(next);
        }
    });

    // removed again when this component's owner is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| on_event.run(UiEvent::Scroll));

    view! { <PortfolioView state on_event /> }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    use super::*;
    use crate::content::{JOBS, PROFILE, PROJECTS, SKILLS};
    use crate::nav::Section;

    fn render(state: UiState) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(state);
            let on_event = Callback::new(|_: UiEvent| {});
            view! { <PortfolioView state on_event /> }.to_html()
        })
    }

    #[test]
    fn every_section_has_an_anchor_in_order() {
        let html = render(UiState::default());
        let positions = Section::ALL
            .iter()
            .map(|s| {
                html.find(&format!("id=\"{}\"", s.id()))
                    .unwrap_or_else(|| panic!("missing #{s}"))
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rendering_is_deterministic() {
        let state = UiState {
            menu_open: true,
            scrolled: true,
            active_section: Section::Projects,
        };
        assert_eq!(render(state), render(state));
    }

    #[test]
    fn one_highlight_per_menu() {
        for section in Section::ALL {
            let html = render(UiState {
                active_section: section,
                ..UiState::default()
            });
            // desktop bar + mobile menu
            assert_eq!(html.matches("aria-current=\"location\"").count(), 2, "{section}");
        }
    }

    #[test]
    fn state_drives_chrome() {
        let calm = render(UiState::default());
        assert!(calm.contains("bg-transparent border-transparent py-6"));
        assert!(calm.contains("scale-y-0 opacity-0 h-0"));
        assert!(calm.contains("aria-expanded=\"false\""));

        let busy = render(UiState {
            menu_open: true,
            scrolled: true,
            active_section: Section::Home,
        });
        assert!(busy.contains("bg-slate-950/90 backdrop-blur-md"));
        assert!(busy.contains("scale-y-100 opacity-100"));
        assert!(busy.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn content_and_links_are_rendered_verbatim() {
        let html = render(UiState::default());
        assert!(html.contains(PROFILE.github));
        assert!(html.contains(PROFILE.linkedin));
        assert!(html.contains("mailto:rupaniyash1818@gmail.com"));
        for project in PROJECTS {
            assert!(html.contains(project.repository));
        }
        for job in JOBS {
            assert!(html.contains(job.company));
        }
        for group in SKILLS {
            assert!(html.contains(group.items[0]));
        }
    }
}
