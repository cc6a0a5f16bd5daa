//! HTTP server exposing the aggregated MXN/USD exchange-rate report.

pub mod api;
pub mod config;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
