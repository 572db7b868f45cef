//! ironctl-server: serves the Smart Ironing System dashboard over HTTP
//!
//! The page never changes, so it is rendered once at startup and handed to
//! every request from shared state.

pub mod http;

pub use http::{router, run_server, AppState, ServerConfig, ServerError};
