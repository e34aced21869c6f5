//! # Domain Layer
//!
//! Conversation model, fixed upstream call parameters and the error taxonomy.
//! This layer is independent of HTTP frameworks and clients.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
