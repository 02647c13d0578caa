//! The validation compiler: placed widgets in, named field rules out.
//!
//! Compilation is total and pure. Any widget list compiles; an empty list
//! yields an empty schema, and presentational widgets (labels, buttons)
//! contribute nothing. The schema is rebuilt from the live widget list on
//! every submission attempt, so rules never go stale.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::WidgetType;
use crate::model::Widget;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("valid regex"));

/// A compiled validation rule for a single field.
///
/// Each variant carries the parameters needed to check one submitted
/// string value. [`FieldRule::check`] dispatches on this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    /// Non-empty and at least `min` characters. Text inputs use
    /// `min = 4`, passwords `min = 8`.
    MinLength {
        /// Minimum length (characters).
        min: usize,
    },
    /// The submitted value must match one of the listed options exactly.
    /// An empty option list can never pass.
    OneOf {
        /// The radio group's option labels, in display order.
        options: Vec<String>,
    },
    /// A standard email address: local-part, `@`, domain with at least
    /// one dot.
    Email,
    /// A digit-only string of 10 to 15 digits.
    Phone,
}

impl FieldRule {
    /// Checks `value` against this rule, producing the field's single
    /// error message on failure.
    ///
    /// `field` is the widget name, used verbatim in the message.
    pub fn check(&self, field: &str, value: &str) -> Result<(), String> {
        match self {
            Self::MinLength { min } => {
                if value.is_empty() {
                    Err(format!("{field} cannot be empty"))
                } else if value.chars().count() < *min {
                    Err(format!("{field} must be atleast {min} character"))
                } else {
                    Ok(())
                }
            }
            Self::OneOf { options } => {
                if options.iter().any(|option| option == value) {
                    Ok(())
                } else {
                    Err(format!("{field} must be one of the provided options"))
                }
            }
            Self::Email => {
                if EMAIL_RE.is_match(value) {
                    Ok(())
                } else {
                    Err(format!("{field} must be a valid email address"))
                }
            }
            Self::Phone => {
                if PHONE_RE.is_match(value) {
                    Ok(())
                } else {
                    Err(format!(
                        "{field} must be a valid phone number with 10 to 15 digits"
                    ))
                }
            }
        }
    }
}

/// The compiled schema: field name to validation rule.
///
/// Duplicate widget names overwrite earlier rules (last-write-wins, in
/// widget placement order). This is mapping semantics, documented rather
/// than left incidental.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompiledSchema {
    rules: HashMap<String, FieldRule>,
}

impl CompiledSchema {
    /// The rule for `field`, if one was compiled.
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// Iterates over `(field, rule)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldRule)> {
        self.rules.iter()
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the schema has no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Compiles the rule schema for a widget list.
///
/// Exactly one rule per unique non-label, non-button widget name; the
/// last widget with a given name wins. Never fails, whatever the list
/// contains.
pub fn compile(widgets: &[Widget]) -> CompiledSchema {
    let mut rules = HashMap::new();
    for widget in widgets {
        let rule = match widget.widget_type {
            WidgetType::Text => FieldRule::MinLength { min: 4 },
            WidgetType::Password => FieldRule::MinLength { min: 8 },
            WidgetType::Radio => FieldRule::OneOf {
                options: widget.options.clone(),
            },
            WidgetType::Email => FieldRule::Email,
            WidgetType::Phone => FieldRule::Phone,
            WidgetType::Label | WidgetType::Button => continue,
        };
        rules.insert(widget.name.clone(), rule);
    }
    CompiledSchema { rules }
}
