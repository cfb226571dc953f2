use leptos::prelude::*;

use crate::components::heading::SectionHeading;
use crate::components::icons::{Glyph, Icon};
use crate::content::{ABOUT, EDUCATION, Education, PROFILE};
use crate::nav::Section;

#[component]
fn EducationCard(entry: &'static Education) -> impl IntoView {
    view! {
        <div class="bg-slate-900 border border-slate-800 p-6 rounded-xl hover:border-cyan-500/30 transition-colors">
            <div class="flex justify-between items-start mb-2">
                <div>
                    <h4 class="text-lg md:text-xl font-medium text-slate-200">{ entry.degree }</h4>
                    <p class="text-cyan-400 text-sm md:text-base">{ entry.school }</p>
                </div>
                <span class="text-xs md:text-sm font-mono bg-slate-800 px-2 py-1 rounded text-slate-400">
                    { entry.period }
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-24 bg-slate-900/30">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading title="About Me" />

                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6 text-slate-400 leading-relaxed text-base md:text-lg">
                        { ABOUT.iter().map(|para| view! { <p>{ *para }</p> }).collect_view() }

                        <div class="flex items-center gap-2 mt-4 text-slate-300">
                            <Glyph icon=Icon::MapPin classes="w-5 h-5 text-cyan-500" />
                            <span>{ PROFILE.location }</span>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h3 class="text-xl md:text-2xl font-semibold text-slate-200 mb-6 flex items-center gap-2">
                            <Glyph icon=Icon::GraduationCap classes="w-6 h-6 text-cyan-500" />
                            "Education"
                        </h3>
                        { EDUCATION.iter().map(|entry| view! { <EducationCard entry /> }).collect_view() }
                    </div>
                </div>
            </div>
        </section>
    }
}
