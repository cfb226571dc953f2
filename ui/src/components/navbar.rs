use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::nav::{Section, UiEvent, UiState};

const DESKTOP_LINKS: [Section; 5] = [
    Section::Home,
    Section::About,
    Section::Experience,
    Section::Projects,
    Section::Skills,
];

pub fn bar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed w-full z-50 transition-all duration-300 border-b \
         bg-slate-950/90 backdrop-blur-md border-slate-800 py-4"
    } else {
        "fixed w-full z-50 transition-all duration-300 border-b \
         bg-transparent border-transparent py-6"
    }
}

pub fn link_class(active: bool) -> &'static str {
    if active {
        "text-sm md:text-base font-medium transition-colors duration-300 hover:text-cyan-400 text-cyan-400"
    } else {
        "text-sm md:text-base font-medium transition-colors duration-300 hover:text-cyan-400 text-slate-400"
    }
}

pub fn cta_class(active: bool) -> &'static str {
    if active {
        "px-6 py-2.5 rounded-full border border-cyan-500 text-cyan-400 bg-cyan-500/10 \
         transition-all text-sm md:text-base font-medium tracking-wide"
    } else {
        "px-6 py-2.5 rounded-full border border-cyan-500 text-cyan-400 hover:bg-cyan-500/10 \
         transition-all text-sm md:text-base font-medium tracking-wide"
    }
}

pub fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "block w-full text-left py-4 px-6 text-lg text-cyan-400 bg-slate-800 \
         border-l-2 border-cyan-400 transition-all"
    } else {
        "block w-full text-left py-4 px-6 text-lg text-slate-300 hover:bg-slate-800 \
         hover:text-cyan-400 border-l-2 border-transparent hover:border-cyan-400 transition-all"
    }
}

pub fn mobile_menu_class(open: bool) -> &'static str {
    if open {
        "md:hidden absolute w-full bg-slate-900 border-b border-slate-800 \
         transition-all duration-300 origin-top scale-y-100 opacity-100"
    } else {
        "md:hidden absolute w-full bg-slate-900 border-b border-slate-800 \
         transition-all duration-300 origin-top scale-y-0 opacity-0 h-0"
    }
}

// aria-current marks the one highlighted link per menu
fn current(active: bool) -> Option<&'static str> {
    active.then_some("location")
}

#[component]
fn NavLink(section: Section, state: Signal<UiState>, on_event: Callback<UiEvent>) -> impl IntoView {
    let active = move || state.get().active_section == section;
    view! {
        <button
            class=move || link_class(active())
            aria-current=move || current(active())
            on:click=move |_| on_event.run(UiEvent::Navigate(section))
        >
            { section.label() }
        </button>
    }
}

#[component]
fn MobileNavLink(section: Section, state: Signal<UiState>, on_event: Callback<UiEvent>) -> impl IntoView {
    let active = move || state.get().active_section == section;
    view! {
        <button
            class=move || mobile_link_class(active())
            aria-current=move || current(active())
            on:click=move |_| on_event.run(UiEvent::Navigate(section))
        >
            { section.label() }
        </button>
    }
}

#[component]
pub fn NavBar(#[prop(into)] state: Signal<UiState>, on_event: Callback<UiEvent>) -> impl IntoView {
    let contact_active = move || state.get().active_section == Section::Contact;
    let menu_open = move || state.get().menu_open;

    view! {
        <nav class=move || bar_class(state.get().scrolled)>
            <div class="max-w-6xl mx-auto px-6 flex justify-between items-center">
                <div class="text-xl md:text-2xl font-bold tracking-tighter text-cyan-400 flex items-center gap-2">
                    <Glyph icon=Icon::Terminal classes="w-6 h-6 md:w-8 md:h-8" />
                    <span>"YR"<span class="text-slate-500">".dev"</span></span>
                </div>

                <div class="hidden md:flex gap-8 items-center">
                    { DESKTOP_LINKS
                        .into_iter()
                        .map(|section| view! { <NavLink section state on_event /> })
                        .collect_view() }
                    <button
                        class=move || cta_class(contact_active())
                        aria-current=move || current(contact_active())
                        on:click=move |_| on_event.run(UiEvent::Navigate(Section::Contact))
                    >
                        "Let's Talk"
                    </button>
                </div>

                <button
                    class="md:hidden text-slate-300 p-2"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| on_event.run(UiEvent::ToggleMenu)
                >
                    { move || {
                        let icon = if menu_open() { Icon::Close } else { Icon::Menu };
                        view! { <Glyph icon classes="w-8 h-8" /> }
                    } }
                </button>
            </div>

            <div class=move || mobile_menu_class(menu_open())>
                { Section::ALL
                    .into_iter()
                    .map(|section| view! { <MobileNavLink section state on_event /> })
                    .collect_view() }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_bar_is_solid() {
        assert!(bar_class(true).contains("backdrop-blur-md"));
        assert!(bar_class(false).contains("bg-transparent"));
    }

    #[test]
    fn highlight_classes_differ() {
        assert!(link_class(true).ends_with("text-cyan-400"));
        assert!(link_class(false).ends_with("text-slate-400"));
        assert_ne!(mobile_link_class(true), mobile_link_class(false));
        assert_ne!(cta_class(true), cta_class(false));
    }

    #[test]
    fn closed_menu_collapses() {
        assert!(mobile_menu_class(false).contains("h-0"));
        assert!(mobile_menu_class(true).contains("scale-y-100"));
    }
}
