//! The builder session: one draft, one form, one user.
//!
//! [`BuilderSession`] is the explicit session context that owns all
//! mutable builder state. Every operation runs synchronously to
//! completion in response to a single user event; nothing here blocks,
//! suspends, or is shared across threads.

use tracing::{debug, info};

use formcraft_core::logging::submit_span;
use formcraft_core::FormResult;
use formcraft_forms::evaluate::SubmissionOutcome;
use formcraft_forms::model::{FormModel, Widget};
use formcraft_forms::render;

use crate::draft::{DraftWidget, DragPayload};

/// The one-shot acknowledgment surfaced after a successful submission.
const SUBMIT_ACK: &str = "Form submitted successfully!";

/// Owns the draft widget, the form model, and the submission lifecycle
/// for a single builder session.
#[derive(Debug, Default)]
pub struct BuilderSession {
    draft: DraftWidget,
    form: FormModel,
    last_outcome: Option<SubmissionOutcome>,
    acknowledgment: Option<String>,
    attempts: u64,
}

impl BuilderSession {
    /// Creates a session with a fresh draft and an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft being configured.
    pub const fn draft(&self) -> &DraftWidget {
        &self.draft
    }

    /// Mutable access to the draft for the editor controls.
    pub fn draft_mut(&mut self) -> &mut DraftWidget {
        &mut self.draft
    }

    /// The assembled form.
    pub const fn form(&self) -> &FormModel {
        &self.form
    }

    /// The outcome of the most recent submission attempt, if any.
    pub const fn last_outcome(&self) -> Option<&SubmissionOutcome> {
        self.last_outcome.as_ref()
    }

    /// Serializes the current draft for a pick-up gesture.
    pub fn begin_drag(&self) -> FormResult<String> {
        let payload = self.draft.payload();
        debug!(widget_type = %payload.widget_type, "drag started");
        payload.to_json()
    }

    /// Handles a drop gesture: decodes the payload and appends the
    /// widget to the form.
    ///
    /// A payload that does not decode leaves the form untouched; the
    /// caller discards the gesture. The draft is not reset, so the same
    /// configuration can be dropped again.
    pub fn drop_payload(&mut self, json: &str) -> FormResult<&Widget> {
        let payload = DragPayload::from_json(json)?;
        let widget = self
            .form
            .place(payload.widget_type, payload.name, payload.options);
        debug!(id = widget.id, widget_type = %widget.widget_type, name = %widget.name, "widget placed");
        Ok(widget)
    }

    /// Feeds one input change from a rendered control into the value
    /// map. Accepted at arbitrary frequency; each call overwrites the
    /// field's entry.
    pub fn input_change(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.form.set_value(field, value);
    }

    /// Runs one submission attempt: compile, evaluate, store errors.
    ///
    /// On success the error map is cleared and a one-shot acknowledgment
    /// becomes available via [`Self::take_acknowledgment`]. On failure
    /// the per-field messages wholesale-replace the previous error
    /// state. Either way the session is immediately idle again.
    pub fn submit(&mut self) -> SubmissionOutcome {
        self.attempts += 1;
        let span = submit_span(self.attempts);
        let _guard = span.enter();

        let outcome = self.form.submit();
        match &outcome {
            SubmissionOutcome::Success => {
                info!("submission accepted");
                self.acknowledgment = Some(SUBMIT_ACK.to_string());
            }
            SubmissionOutcome::Failure(failures) => {
                info!(failing_fields = failures.len(), "submission rejected");
                self.acknowledgment = None;
            }
        }
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Takes the pending success acknowledgment, if one is waiting. It
    /// is shown once: a second call returns `None`.
    pub fn take_acknowledgment(&mut self) -> Option<String> {
        self.acknowledgment.take()
    }

    /// Renders the HTML preview of the assembled form.
    pub fn preview(&self) -> String {
        render::render_form(&self.form)
    }

    /// Clears widgets, values, errors, and the stored submission state
    /// together. The draft survives: reset discards the form, not the
    /// configuration being edited.
    pub fn reset(&mut self) {
        self.form.reset();
        self.last_outcome = None;
        self.acknowledgment = None;
        info!("form reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_forms::catalog::WidgetType;

    fn place_text_field(session: &mut BuilderSession, name: &str) {
        session.draft_mut().set_type(WidgetType::Text);
        session.draft_mut().set_name(name);
        let json = session.begin_drag().unwrap();
        session.drop_payload(&json).unwrap();
    }

    #[test]
    fn test_drag_and_drop_places_widget() {
        let mut session = BuilderSession::new();
        place_text_field(&mut session, "Username");
        assert_eq!(session.form().widgets().len(), 1);
        assert_eq!(session.form().widgets()[0].name, "Username");
        assert_eq!(session.form().widgets()[0].id, 1);
    }

    #[test]
    fn test_draft_survives_drop_for_rapid_reuse() {
        let mut session = BuilderSession::new();
        place_text_field(&mut session, "Username");
        assert_eq!(session.draft().name(), "Username");

        let json = session.begin_drag().unwrap();
        session.drop_payload(&json).unwrap();
        assert_eq!(session.form().widgets().len(), 2);
        assert_eq!(session.form().widgets()[1].id, 2);
    }

    #[test]
    fn test_malformed_drop_leaves_form_unchanged() {
        let mut session = BuilderSession::new();
        assert!(session.drop_payload("{garbage").is_err());
        assert!(session.form().widgets().is_empty());
    }

    #[test]
    fn test_submit_failure_then_success() {
        let mut session = BuilderSession::new();
        place_text_field(&mut session, "Username");

        session.input_change("Username", "abc");
        let outcome = session.submit();
        assert!(!outcome.is_success());
        assert!(session.take_acknowledgment().is_none());
        assert_eq!(
            session.form().error("Username"),
            Some("Username must be atleast 4 character")
        );

        session.input_change("Username", "abcd");
        let outcome = session.submit();
        assert!(outcome.is_success());
        assert!(session.form().errors().is_empty());
    }

    #[test]
    fn test_acknowledgment_is_one_shot() {
        let mut session = BuilderSession::new();
        place_text_field(&mut session, "Username");
        session.input_change("Username", "abcd");
        session.submit();
        assert_eq!(
            session.take_acknowledgment(),
            Some("Form submitted successfully!".to_string())
        );
        assert_eq!(session.take_acknowledgment(), None);
    }

    #[test]
    fn test_reset_clears_form_and_outcome_but_not_draft() {
        let mut session = BuilderSession::new();
        place_text_field(&mut session, "Username");
        session.input_change("Username", "x");
        session.submit();
        assert!(session.last_outcome().is_some());

        session.reset();
        assert!(session.form().widgets().is_empty());
        assert!(session.form().values().is_empty());
        assert!(session.form().errors().is_empty());
        assert!(session.last_outcome().is_none());
        assert_eq!(session.draft().name(), "Username");

        place_text_field(&mut session, "Fresh");
        assert_eq!(session.form().widgets()[0].id, 1);
    }

    #[test]
    fn test_preview_reflects_placed_widgets() {
        let mut session = BuilderSession::new();
        place_text_field(&mut session, "Username");
        let html = session.preview();
        assert!(html.contains(r#"name="Username""#));
    }
}
