#![recursion_limit = "256"]

use leptos::*;
use mount::mount_to_body;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}

pub mod app;
pub mod components;
pub mod content;
pub mod nav;
pub mod pages;
pub mod routes;

pub use crate::app::App;
