//! # client
//!
//! Leptos + WASM browser client for the Sequoh genetic-testing platform.
//!
//! This crate contains pages, components, application state and the REST
//! client. Wire types shared with the backend contract live in the `schema`
//! crate; everything here is presentation, validation and request shaping.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_util;
