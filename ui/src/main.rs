//! Mergington Activities Page
//!
//! Browser front end for the Mergington High School extracurricular
//! activities service, built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with availability and participants
//! - Signup form with a self-hiding result banner
//! - Per-participant unregister buttons
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Page logic lives in the `mergington` crate; this crate supplies the
//! signal-backed store, the `gloo-net` client, the timer and the markup.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    logging::init();

    mount_to_body(|| view! { <app::App /> });
}
