//! # formcraft-builder
//!
//! The interactive side of formcraft: the mutable draft widget being
//! configured before placement, the serialized drag payload that carries
//! a draft snapshot across the UI boundary, and the [`session`] object
//! that owns one draft and one form and drives the whole
//! edit-place-submit lifecycle.

pub mod draft;
pub mod session;

pub use draft::{DraftWidget, DragPayload};
pub use session::BuilderSession;
