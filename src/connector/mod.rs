//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion over HTTP (reqwest), plus an in-process mock
//! - Credential lookup from the environment
//! - Page rendering (minijinja)
//! - The axum HTTP surface

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
