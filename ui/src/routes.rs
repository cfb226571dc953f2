// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{not_found::NotFound, portfolio::Portfolio};

#[component]
pub fn PageRoutes() -> impl IntoView {
    view! {
      <Routes fallback=NotFound>
        <Route path=path!("") view=Portfolio />
      </Routes>
    }
}
