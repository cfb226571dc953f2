use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::PROFILE;
use crate::nav::Section;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-24 text-center">
            <div class="max-w-2xl mx-auto px-6">
                <h2 class="text-3xl md:text-4xl font-bold text-slate-100 mb-6">"Let's Connect"</h2>
                <p class="text-slate-400 mb-10 text-lg md:text-xl leading-relaxed">
                    "I am actively seeking entry-level opportunities as a Software Engineer or Data Engineer. \
                     Whether you have a question or just want to say hi, I'll try my best to get back to you!"
                </p>

                <a
                    href=PROFILE.mailto()
                    class="inline-flex items-center gap-3 px-8 py-4 bg-cyan-600 hover:bg-cyan-500 text-white rounded-full font-semibold transition-all shadow-lg shadow-cyan-500/20 hover:shadow-cyan-500/40 hover:-translate-y-1 text-base md:text-lg"
                >
                    <Glyph icon=Icon::Mail classes="w-5 h-5 md:w-6 md:h-6" />
                    "Say Hello"
                </a>

                <div class="mt-20 pt-10 border-t border-slate-800 text-slate-500 text-xs md:text-sm">
                    <p>"Designed & Built by " { PROFILE.first_name } " " { PROFILE.last_name }</p>
                    <p class="mt-2">{ PROFILE.location } " • " { PROFILE.phone }</p>
                </div>
            </div>
        </section>
    }
}
