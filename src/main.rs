#![allow(warnings)]
//! Green Earth Frontend Entry Point

mod api;
mod app;
mod cart;
mod catalog;
mod classify;
mod components;
mod context;
mod fallback;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
