//! Orbit Frontend Entry Point

mod api;
mod app;
mod autosave;
mod components;
mod jwt;
mod markdown;
mod models;
mod pages;
mod session;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
