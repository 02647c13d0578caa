//! Core error types for formcraft.
//!
//! Validation failures are not represented here: a field value that does
//! not satisfy its compiled rule is ordinary data (a per-field message in
//! the form's error map), never a Rust error. The variants below cover the
//! recoverable boundary failures of the builder itself, such as a drag
//! payload that does not decode.

use thiserror::Error;

/// The primary error type for the formcraft workspace.
///
/// Every variant is recoverable: the session layer handles these by
/// ignoring the offending event, mirroring how a dropped gesture with no
/// usable payload is simply discarded.
#[derive(Error, Debug)]
pub enum FormError {
    /// A drag payload that could not be decoded from its serialized form.
    #[error("malformed drag payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// A widget-type tag that does not name a known widget type.
    #[error("unknown widget type: {0:?}")]
    UnknownWidgetType(String),
}

/// Convenience result alias used across the workspace.
pub type FormResult<T> = Result<T, FormError>;
