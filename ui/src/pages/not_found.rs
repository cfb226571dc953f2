use leptos::prelude::ElementChild;
use leptos::prelude::ClassAttribute;
use leptos::component;
use leptos::IntoView;
use leptos::view;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <div class="min-h-screen flex flex-col items-center justify-center gap-6 bg-slate-950 text-slate-300">
        <h1 class="text-4xl font-bold text-cyan-400">"404"</h1>
        <p>"Nothing lives at this address."</p>
        <a href="/" class="px-6 py-2.5 rounded-full border border-cyan-500 text-cyan-400 hover:bg-cyan-500/10">"Back to the start"</a>
      </div>
    }
}
