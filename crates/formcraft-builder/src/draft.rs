//! The draft widget editor and the drag payload.
//!
//! Exactly one [`DraftWidget`] exists per builder session. It accepts any
//! input without complaint: emptiness, duplicates, and out-of-range edits
//! are deferred to validation time (or silently ignored), so the editor
//! itself has no error conditions at all.

use serde::{Deserialize, Serialize};

use formcraft_core::FormResult;
use formcraft_forms::catalog::WidgetType;

/// The in-progress widget configuration being edited before placement.
///
/// The draft persists across placements rather than resetting after each
/// drop, so a configured draft can be placed repeatedly.
#[derive(Debug, Clone)]
pub struct DraftWidget {
    widget_type: WidgetType,
    name: String,
    options: Vec<String>,
}

impl Default for DraftWidget {
    /// A fresh draft: text input, empty name, no options.
    fn default() -> Self {
        Self {
            widget_type: WidgetType::Text,
            name: String::new(),
            options: Vec::new(),
        }
    }
}

impl DraftWidget {
    /// Creates a draft with the session-start defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft's current type.
    pub const fn widget_type(&self) -> WidgetType {
        self.widget_type
    }

    /// The draft's current name, verbatim as typed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The draft's current option list.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Replaces the type. Name and options are preserved so that
    /// switching type keeps prior input.
    pub fn set_type(&mut self, widget_type: WidgetType) {
        self.widget_type = widget_type;
    }

    /// Replaces the name verbatim: no trimming, empty allowed. Emptiness
    /// is only rejected at validation time for applicable types.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a new option with the placeholder label `Option {n+1}`.
    pub fn add_option(&mut self) {
        self.options.push(format!("Option {}", self.options.len() + 1));
    }

    /// Replaces the option at `index`. A no-op when `index` is out of
    /// range.
    pub fn set_option(&mut self, index: usize, value: impl Into<String>) {
        if let Some(option) = self.options.get_mut(index) {
            *option = value.into();
        }
    }

    /// Captures the current configuration as a drag payload.
    pub fn payload(&self) -> DragPayload {
        DragPayload {
            widget_type: self.widget_type,
            name: self.name.clone(),
            options: self.options.clone(),
        }
    }
}

/// The snapshot record handed from the draft editor to the placement
/// handler at the moment of a drop gesture.
///
/// The handoff crosses the UI boundary serialized as JSON, the way a
/// drag-and-drop data transfer carries its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// The captured widget type tag.
    #[serde(rename = "widgetType")]
    pub widget_type: WidgetType,
    /// The captured name, possibly empty.
    pub name: String,
    /// The captured option list.
    pub options: Vec<String>,
}

impl DragPayload {
    /// Serializes this payload for the drag gesture.
    pub fn to_json(&self) -> FormResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a payload received by a drop gesture. Malformed JSON is a
    /// recoverable error; the caller discards the drop.
    pub fn from_json(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
