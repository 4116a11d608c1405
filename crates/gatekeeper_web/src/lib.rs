//! Browser adapter for the upload page gatekeeper.
//!
//! `ui` turns view models into DOM commands and is plain Rust; `platform`
//! binds it to the live page and only exists on wasm32.
pub mod ui;

#[cfg(target_arch = "wasm32")]
mod platform;
