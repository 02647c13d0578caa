//! # formcraft-core
//!
//! Foundation types for the formcraft workspace. This crate has no
//! intra-workspace dependencies and provides the error and logging
//! plumbing shared by all other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;

// Re-export the most commonly used types at the crate root.
pub use error::{FormError, FormResult};
