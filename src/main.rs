mod app;
mod components;
mod config;
mod core;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::APP_ROOT_ID;

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id(APP_ROOT_ID)
        .expect("Failed to find #app element");
    let config = core::embed::config_from_element(&root);

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), move || {
        view! { <App config=config.clone() /> }
    })
    .forget();
}
