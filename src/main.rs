#![allow(warnings)]
//! Expandable Sections Frontend Entry Point

mod app;
mod components;
mod context;
mod dom;
mod error;
mod handle;
mod markup;
mod models;
mod visibility;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
