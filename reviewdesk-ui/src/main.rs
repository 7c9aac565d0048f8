//! ReviewDesk Dashboard
//!
//! Review moderation dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Filterable, sortable review listing with approve/reject actions
//! - Stats cards and rating/source/sentiment analytics
//! - Guest-facing property pages showing approved reviews
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the reviews REST API over HTTP and reuses the
//! `reviewdesk` core for models, normalization and aggregation.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
