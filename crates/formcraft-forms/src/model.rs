//! The form model: placed widgets plus the current value and error maps.
//!
//! A [`FormModel`] is owned by a single builder session. Widgets are
//! appended by placement and destroyed only by a whole-form reset; values
//! arrive from the rendering collaborator on every input change; errors
//! are wholesale-replaced by each submission attempt.

use std::collections::HashMap;

use crate::catalog::WidgetType;
use crate::compiler;
use crate::evaluate::{self, SubmissionOutcome};

/// Name given to a placed widget whose draft name was left empty.
pub const UNNAMED_FIELD: &str = "Unnamed Field";

/// A placed widget. Immutable once created: the model hands out only
/// shared references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    /// Positive, unique within one form, assigned as `len + 1` at
    /// placement time. Ids are never reused; removal is whole-list reset
    /// only.
    pub id: usize,
    /// The widget type.
    pub widget_type: WidgetType,
    /// Display label and field key. Non-empty after placement.
    pub name: String,
    /// Option labels; populated only for [`WidgetType::Radio`].
    pub options: Vec<String>,
}

/// Ordered placed widgets plus the per-field value and error maps.
///
/// Insertion order is display order is validation order.
#[derive(Debug, Default)]
pub struct FormModel {
    widgets: Vec<Widget>,
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
}

impl FormModel {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a widget captured from a draft snapshot.
    ///
    /// The id is `len + 1`. An empty captured name falls back to
    /// [`UNNAMED_FIELD`]. Options are retained only for radio groups;
    /// every other type is placed with an empty option list. No
    /// validation happens here: duplicate names are permitted and
    /// resolved last-write-wins at compile time.
    pub fn place(
        &mut self,
        widget_type: WidgetType,
        name: impl Into<String>,
        options: Vec<String>,
    ) -> &Widget {
        let name = name.into();
        let name = if name.is_empty() {
            UNNAMED_FIELD.to_string()
        } else {
            name
        };
        let options = if widget_type == WidgetType::Radio {
            options
        } else {
            Vec::new()
        };
        self.widgets.push(Widget {
            id: self.widgets.len() + 1,
            widget_type,
            name,
            options,
        });
        self.widgets.last().expect("just pushed")
    }

    /// Overwrites the current value for `field`. Invoked by the rendering
    /// collaborator on every keystroke or selection, at arbitrary
    /// frequency.
    pub fn set_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// The placed widgets, in placement order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// The current value for `field`, if any input has arrived.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// The full value map.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// The current error message for `field`, if the last submission
    /// rejected it.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// The full error map from the last submission attempt.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Compiles the rule schema from the current widget list, evaluates
    /// the current values against it, and wholesale-replaces the error
    /// map with the outcome's failures (success clears it).
    ///
    /// Synchronous and infallible: malformed or missing values are
    /// validation failures, never errors.
    pub fn submit(&mut self) -> SubmissionOutcome {
        let schema = compiler::compile(&self.widgets);
        let outcome = evaluate::evaluate(&schema, &self.values);
        self.errors = match &outcome {
            SubmissionOutcome::Success => HashMap::new(),
            SubmissionOutcome::Failure(failures) => failures.clone(),
        };
        outcome
    }

    /// Clears widgets, values, and errors together. No partial reset
    /// state is observable; the next placement restarts id numbering
    /// at 1.
    pub fn reset(&mut self) {
        self.widgets.clear();
        self.values.clear();
        self.errors.clear();
    }
}
