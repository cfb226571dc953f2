use leptos::prelude::*;

use crate::components::heading::SectionHeading;
use crate::components::icons::{Glyph, Icon};
use crate::content::{PROJECTS, Project};
use crate::nav::Section;

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let accent = project.accent;
    view! {
        <article class=format!(
            "bg-slate-900 rounded-xl p-8 border border-slate-800 hover:shadow-lg transition-all group {}",
            accent.card_hover()
        )>
            <div class="flex justify-between items-start mb-6">
                <div class=format!("p-3 bg-slate-800 rounded-lg group-hover:scale-110 transition-transform {}", accent.text())>
                    <Glyph icon=project.icon classes="w-6 h-6 md:w-7 md:h-7" />
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.repository
                        target="_blank"
                        rel="noreferrer"
                        aria-label=format!("{} repository", project.title)
                        class="text-slate-500 hover:text-slate-300 transform hover:scale-110 transition-transform"
                    >
                        <Glyph icon=Icon::Github classes="w-5 h-5 md:w-6 md:h-6" />
                    </a>
                </div>
            </div>
            <h3 class=format!(
                "text-xl md:text-2xl font-bold text-slate-200 mb-3 transition-colors {}",
                accent.hover_text()
            )>
                { project.title }
            </h3>
            <p class="text-slate-400 text-sm md:text-base mb-6 leading-relaxed">{ project.description }</p>
            <div class="flex flex-wrap gap-2">
                { project.tags.iter().map(|tag| view! {
                    <span class=format!("text-xs md:text-sm font-mono px-3 py-1.5 rounded {}", accent.tag())>
                        { *tag }
                    </span>
                }).collect_view() }
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-24">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading title="Featured Projects" />

                <div class="grid md:grid-cols-2 gap-8">
                    { PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view() }
                </div>
            </div>
        </section>
    }
}
