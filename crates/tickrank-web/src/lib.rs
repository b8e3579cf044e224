//! HTTP surface for tickrank.
//!
//! The binary in `main.rs` wires configuration and the real Finnhub
//! adapter; everything routable lives here so tests can drive the
//! router with an in-memory source.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use routes::{app, AppState, RankRequest, RankResponse};
