//! # chat-client
//!
//! Leptos + WASM browser client for a plain-text chat server.
//!
//! A login view collects a display name; the chat view then opens a
//! WebSocket, sends the name as its first frame, renders every inbound frame
//! as a line, and handles `/help`, `/users` and `/clear` locally.

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: route panics to the console and hydrate the
/// server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
