//! TFDN Site
//!
//! Web front end of the Taji Fanisi Development Network, built with Leptos (WASM).
//!
//! # Pages
//!
//! - Home: hero, impact stats and stories, sign-in
//! - Framework: strategic timeline and the four pillars
//! - AI Career Demo: the career quiz and its recommendations
//! - Research, Partners, Get Involved
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Content comes from the TFDN API over HTTP; sign-in goes
//! straight to the hosted auth provider.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
