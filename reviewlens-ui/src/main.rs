//! ReviewLens Dashboard
//!
//! Product review sentiment dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Product sidebar with automatic first selection
//! - Sentiment share, average rating and review count cards
//! - Area and donut sentiment charts (ApexCharts)
//! - Recent reviews table
//! - Light/dark theme persisted in `localStorage`
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Data shaping and the refresh flow live in the `reviewlens`
//! core crate; this crate binds them to the DOM.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Core crate diagnostics arrive as `log` records
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Console logger unavailable: {}", e).into());
    }

    mount_to_body(|| view! { <app::App /> });
}
