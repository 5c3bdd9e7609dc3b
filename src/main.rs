//! Hawaiʻi Indicator Dashboard
//!
//! Static comparison dashboard built with Leptos (WASM). Each panel loads one
//! pre-generated metric snapshot and charts Hawaiʻi against the average of
//! the other U.S. states.
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads per-metric JSON snapshots published as static files
//! next to the page; there is no live API and no shared state between panels,
//! so a broken snapshot only ever takes down its own panel.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
