//! Shared Dioxus components and D3.js bridge for the Olympic medals dashboard.
//!
//! This crate provides:
//! - `js_bridge`: dataset fetch via the browser `fetch` API, and Rust wrappers
//!   for the D3.js chart functions via `js_sys::eval()`
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
