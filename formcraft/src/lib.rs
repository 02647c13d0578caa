//! # formcraft
//!
//! A drag-and-drop form builder: widget types are configured in a draft
//! editor, dropped onto a canvas, and assembled into a form whose
//! per-field validation rules are compiled declaratively from the widget
//! list.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access; depend on the individual crates for finer-grained control.
//!
//! ## Quick start
//!
//! ```
//! use formcraft::builder::BuilderSession;
//! use formcraft::forms::catalog::WidgetType;
//!
//! let mut session = BuilderSession::new();
//! session.draft_mut().set_type(WidgetType::Email);
//! let payload = session.begin_drag()?;
//! session.drop_payload(&payload)?;
//!
//! session.input_change("Unnamed Field", "user@example.com");
//! assert!(session.submit().is_success());
//! # Ok::<(), formcraft::core::FormError>(())
//! ```

/// Foundation types: errors and logging setup.
pub use formcraft_core as core;

/// Form domain: catalog, form model, compiler, evaluator, preview.
pub use formcraft_forms as forms;

/// Interactive builder: draft editor, drag payload, session.
pub use formcraft_builder as builder;

// Third-party re-exports so embedding applications need not pin their
// own copies.
pub use serde_json;
pub use tracing;
