//! HTTP invocation boundary for the hoplink URL shortener.
//!
//! Wires the shortener and redirector services behind an axum router
//! and translates their outcomes into transport responses.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
