//! Submission evaluation: applying a compiled schema to the current form
//! values.
//!
//! Failures accumulate rather than short-circuiting, so every failing
//! field is reported together in one pass. Evaluation never panics: a
//! missing value is treated as the empty string and simply fails its
//! rule.

use std::collections::HashMap;

use crate::compiler::CompiledSchema;

/// The result of one submission attempt.
///
/// Both variants are terminal for the attempt; the form returns to idle
/// immediately, awaiting the next edit or submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every rule passed.
    Success,
    /// At least one rule failed; every failing field is mapped to its
    /// single error message.
    Failure(HashMap<String, String>),
}

impl SubmissionOutcome {
    /// Whether this outcome is a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The failure map, empty on success.
    pub fn failures(&self) -> Option<&HashMap<String, String>> {
        match self {
            Self::Success => None,
            Self::Failure(failures) => Some(failures),
        }
    }
}

/// Evaluates every rule in `schema` against `values`.
///
/// A field with no entry in `values` is checked as the empty string.
/// Returns [`SubmissionOutcome::Success`] only when all rules pass.
pub fn evaluate(schema: &CompiledSchema, values: &HashMap<String, String>) -> SubmissionOutcome {
    let mut failures = HashMap::new();
    for (field, rule) in schema.iter() {
        let value = values.get(field).map_or("", String::as_str);
        if let Err(message) = rule.check(field, value) {
            failures.insert(field.clone(), message);
        }
    }
    if failures.is_empty() {
        SubmissionOutcome::Success
    } else {
        SubmissionOutcome::Failure(failures)
    }
}
