//! Minion - personal resource manager
//!
//! Dioxus fullstack single-page app backed by a Supabase `resources`
//! table. Links, images, and notes are filed under fixed categories and
//! browsed in a masonry grid.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod cache;
mod components;
mod data;
mod form;
mod pages;
mod resources;
mod routes;
mod state;
mod types;

use dioxus::prelude::*;

fn main() {
    // Supabase credentials come from the environment on the server.
    #[cfg(feature = "server")]
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
