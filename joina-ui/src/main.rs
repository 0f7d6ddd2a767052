//! Joina Dashboard
//!
//! Browser front end of the Joina analytics dashboard, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Visitor statistics charts rendered with Chart.js
//! - Login and registration against the Joina API
//! - Locally saved dashboard preferences
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. View lifecycles, payload
//! validation, chart configuration and form handling live in the `joina`
//! crate; this crate performs the HTTP requests and renders.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    components::chart::register_elements();

    mount_to_body(|| view! { <app::App /> });
}
