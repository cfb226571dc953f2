use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::PROFILE;
use crate::nav::Section;

#[component]
fn SocialLink(href: String, icon: Icon, hover: &'static str, #[prop(optional)] external: bool) -> impl IntoView {
    let class = format!(
        "p-3 md:p-4 rounded-lg bg-slate-800 hover:bg-slate-700 {hover} transition-all transform hover:-translate-y-1"
    );
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            class=class
        >
            <Glyph icon classes="w-5 h-5 md:w-6 md:h-6" />
        </a>
    }
}

#[component]
fn CodeCard() -> impl IntoView {
    view! {
        <div class="relative mt-12 md:mt-0 group">
            <div class="absolute -inset-1 bg-gradient-to-r from-cyan-500 to-blue-600 rounded-2xl blur opacity-25 group-hover:opacity-50 transition duration-1000"></div>
            <div class="relative bg-slate-900 rounded-2xl p-4 md:p-6 border border-slate-800 font-mono text-xs sm:text-sm md:text-base shadow-2xl overflow-hidden">
                <div class="flex gap-2 mb-4">
                    <div class="w-3 h-3 rounded-full bg-red-500"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                    <div class="w-3 h-3 rounded-full bg-green-500"></div>
                </div>
                <div class="space-y-3">
                    <p class="text-purple-400">"class "<span class="text-yellow-400">"DataEngineer"</span>":"</p>
                    <p class="pl-4 text-slate-400">"def "<span class="text-blue-400">"__init__"</span>"(self):"</p>
                    <p class="pl-8 text-slate-500">"self.name = "<span class="text-green-400">"\"Yash Rupani\""</span></p>
                    <p class="pl-8 text-slate-500">
                        "self.skills = ["
                        <span class="text-green-400">"\"Python\""</span>", "
                        <span class="text-green-400">"\"Spark\""</span>", "
                        <span class="text-green-400">"\"AWS\""</span>"]"
                    </p>
                    <p class="pl-8 text-slate-500">"self.location = "<span class="text-green-400">"\"Corvallis, OR\""</span></p>
                    <br/>
                    <p class="pl-4 text-slate-400">"def "<span class="text-blue-400">"solve_problem"</span>"(self, data):"</p>
                    <p class="pl-8 text-slate-500">"# Transforming complexity into clarity"</p>
                    <p class="pl-8 text-purple-400">"return "<span class="text-slate-300">"data.optimize()"</span></p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="min-h-screen flex items-center justify-center pt-20 relative overflow-hidden">
            <div class="absolute top-20 right-0 w-96 h-96 bg-cyan-500/10 rounded-full blur-3xl -z-10 animate-pulse"></div>
            <div class="absolute bottom-20 left-0 w-64 h-64 bg-blue-600/10 rounded-full blur-3xl -z-10"></div>

            <div class="max-w-6xl mx-auto px-6 grid md:grid-cols-2 gap-12 items-center">
                <div class="space-y-6 md:space-y-8">
                    <div class="inline-block px-4 py-1.5 rounded-full bg-cyan-950/50 border border-cyan-900 text-cyan-400 text-xs md:text-sm font-mono mb-2">
                        "Hello, World! I am"
                    </div>

                    <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-bold leading-tight">
                        { PROFILE.first_name } <br/>
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500">
                            { PROFILE.last_name }
                        </span>
                    </h1>

                    <h2 class="text-xl sm:text-2xl md:text-3xl text-slate-400 font-light">{ PROFILE.title }</h2>

                    <p class="text-slate-400 text-base sm:text-lg md:text-xl max-w-lg leading-relaxed">
                        { PROFILE.pitch }
                    </p>

                    <div class="flex gap-4 pt-4">
                        <SocialLink href=PROFILE.github.to_owned() icon=Icon::Github hover="hover:text-cyan-400" external=true />
                        <SocialLink href=PROFILE.linkedin.to_owned() icon=Icon::Linkedin hover="hover:text-blue-400" external=true />
                        <SocialLink href=PROFILE.mailto() icon=Icon::Mail hover="hover:text-red-400" />
                    </div>
                </div>

                <CodeCard/>
            </div>

            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce text-slate-600">
                <Glyph icon=Icon::ChevronDown classes="w-8 h-8" />
            </div>
        </section>
    }
}
