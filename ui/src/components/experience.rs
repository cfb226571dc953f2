use leptos::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::{JOBS, Job};
use crate::nav::Section;

#[component]
fn TimelineEntry(job: &'static Job) -> impl IntoView {
    view! {
        <div class="relative pl-8 md:pl-12 group">
            <div class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-slate-900 border-2 border-cyan-500 group-hover:bg-cyan-500 transition-colors"></div>

            <h3 class="text-xl md:text-2xl font-semibold text-slate-100 group-hover:text-cyan-400 transition-colors">
                { job.role }
            </h3>
            <div class="flex flex-wrap gap-2 items-center text-sm text-slate-400 mt-2 mb-4">
                <span class="font-medium text-slate-300 text-sm md:text-base">{ job.company }</span>
                <span>"•"</span>
                <span class="font-mono text-xs bg-slate-800 px-2 py-0.5 rounded text-slate-400">{ job.period }</span>
            </div>
            <ul class="space-y-3">
                { job.description.iter().map(|point| view! {
                    <li class="text-slate-400 text-sm md:text-base leading-relaxed flex gap-3">
                        <span class="text-cyan-500 mt-1.5 min-w-[12px]">"▹"</span>
                        { *point }
                    </li>
                }).collect_view() }
            </ul>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-24 bg-slate-900/50">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading title="Work Experience" />

                <div class="space-y-12 relative border-l-2 border-slate-800 ml-3 md:ml-6">
                    { JOBS.iter().map(|job| view! { <TimelineEntry job /> }).collect_view() }
                </div>
            </div>
        </section>
    }
}
