//! Listen Data Service preview
//!
//! Browser front-end that shows the live price-update stream.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod state;
pub mod utils;

use app::App;

pub use error::{Error, Result};

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Listen preview starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
