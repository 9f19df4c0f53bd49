//! Folio Admin Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod listing;
mod pagination;
mod list_controller;
mod slug;
mod forms;
mod slot;
mod tree;
mod context;
mod store;
mod route;
mod notify;
mod logging;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
