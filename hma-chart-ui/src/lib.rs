//! Shared Dioxus components and the D3.js bridge for the housing dashboard.
//!
//! This crate provides:
//! - `state`: reactive `AppState` bundling the filter signals and the
//!   loaded market data
//! - `js_bridge`: Rust wrappers for the D3.js chart functions, evaluated
//!   as globals via `js_sys::eval()`
//! - `components`: reusable RSX components (state selector, date range
//!   picker, metric boxes, containers)
//! - `us_states`: the fixed dropdown entries

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod us_states;
