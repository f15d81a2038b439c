//! Job Search Assistant Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod session_store;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    gloo::console::log!(format!("backend: {}", api::backend::API_URL));
    leptos::mount::mount_to_body(app::App);
}
