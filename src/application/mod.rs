//! # Application Layer
//!
//! Seams to the outside world and the submit orchestration built on them.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
