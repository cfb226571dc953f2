use leptos::prelude::*;

/// Section title followed by a hairline rule.
#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-16">
            <h2 class="text-2xl md:text-3xl font-bold text-slate-100">{ title }</h2>
            <div class="h-px bg-slate-800 flex-grow"></div>
        </div>
    }
}
