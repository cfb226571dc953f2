use leptos::prelude::*;

use crate::components::icons::Glyph;
use crate::content::{SKILLS, SkillCategory};
use crate::nav::Section;

#[component]
fn SkillColumn(group: &'static SkillCategory) -> impl IntoView {
    let accent = group.accent;
    view! {
        <div class="space-y-4">
            <div class=format!("flex items-center gap-2 mb-2 {}", accent.text())>
                <Glyph icon=group.icon classes="w-5 h-5 md:w-6 md:h-6" />
                <h3 class="font-semibold text-base md:text-lg">{ group.category }</h3>
            </div>
            <div class="flex flex-col gap-2">
                { group.items.iter().map(|skill| view! {
                    <div class=format!(
                        "bg-slate-900 border border-slate-800 p-3 rounded text-sm md:text-base text-slate-300 transition-colors {}",
                        accent.item_hover()
                    )>
                        { *skill }
                    </div>
                }).collect_view() }
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-24 bg-slate-900/50">
            <div class="max-w-5xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-2xl md:text-3xl font-bold text-slate-100 mb-4">"Technical Arsenal"</h2>
                    <p class="text-slate-400 text-base md:text-lg">"Tools and technologies I use to bring data to life."</p>
                </div>

                <div class="grid md:grid-cols-4 gap-6">
                    { SKILLS.iter().map(|group| view! { <SkillColumn group /> }).collect_view() }
                </div>
            </div>
        </section>
    }
}
