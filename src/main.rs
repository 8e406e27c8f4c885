mod app;
mod components;
mod core;
mod wallet;

use leptos::*;
use app::{load_listing, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Starting NFT mint widget");

    let listing = load_listing();
    mount_to_body(move || view! { <App listing=listing/> })
}
