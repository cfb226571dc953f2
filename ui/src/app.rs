use leptos::*;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;
use leptos_meta::{Meta, Title};

use crate::content::PROFILE;
use crate::routes::PageRoutes;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let title = format!("{} {} | {}", PROFILE.first_name, PROFILE.last_name, PROFILE.title);

    view! {
      <Title text=title />
      <Meta name="description" content=PROFILE.pitch />
      <Router>
        <PageRoutes/>
      </Router>
    }
}
