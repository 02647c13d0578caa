//! The widget catalog: the closed set of supported widget types and which
//! configuration attributes apply to each.
//!
//! Adding a widget type is a compile-time-checked change: the exhaustive
//! matches here, in [`crate::compiler`], and in [`crate::render`] must all
//! be extended together.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use formcraft_core::FormError;

/// Enumerates all supported widget types.
///
/// The serialized (and `Display`/`FromStr`) form is the lowercase tag used
/// by the drag payload, e.g. `"text"` or `"radio"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    /// A single-line text input.
    Text,
    /// A password input.
    Password,
    /// A radio group backed by an option list.
    Radio,
    /// A static text label; produces no field.
    Label,
    /// The form's submit button; produces no field.
    Button,
    /// An email address input.
    Email,
    /// A phone number input.
    Phone,
}

impl WidgetType {
    /// All widget types, in the order the type picker lists them.
    pub const ALL: [Self; 7] = [
        Self::Label,
        Self::Text,
        Self::Password,
        Self::Radio,
        Self::Email,
        Self::Phone,
        Self::Button,
    ];

    /// Returns the lowercase tag for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Radio => "radio",
            Self::Label => "label",
            Self::Button => "button",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Whether the draft editor shows a name field for this type.
    ///
    /// Every type is named by the user except `Email`, whose field is
    /// always labeled as an email address.
    pub const fn shows_name_editor(self) -> bool {
        !matches!(self, Self::Email)
    }

    /// Whether the draft editor shows the option-list editor. Only radio
    /// groups carry options.
    pub const fn shows_options_editor(self) -> bool {
        matches!(self, Self::Radio)
    }

    /// Whether placing this widget gives the form its submit control.
    pub const fn is_submit_trigger(self) -> bool {
        matches!(self, Self::Button)
    }

    /// Whether the validation compiler emits a rule for this type.
    ///
    /// Labels and buttons are presentational: they never contribute a
    /// field to the compiled schema.
    pub const fn produces_rule(self) -> bool {
        !matches!(self, Self::Label | Self::Button)
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "password" => Ok(Self::Password),
            "radio" => Ok(Self::Radio),
            "label" => Ok(Self::Label),
            "button" => Ok(Self::Button),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => Err(FormError::UnknownWidgetType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for ty in WidgetType::ALL {
            let parsed: WidgetType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_tag() {
        let err = "checkbox".parse::<WidgetType>().unwrap_err();
        assert!(matches!(err, FormError::UnknownWidgetType(tag) if tag == "checkbox"));
    }

    #[test]
    fn test_name_editor_applies_to_all_but_email() {
        for ty in WidgetType::ALL {
            assert_eq!(ty.shows_name_editor(), ty != WidgetType::Email);
        }
    }

    #[test]
    fn test_options_editor_is_radio_only() {
        for ty in WidgetType::ALL {
            assert_eq!(ty.shows_options_editor(), ty == WidgetType::Radio);
        }
    }

    #[test]
    fn test_button_is_the_only_submit_trigger() {
        for ty in WidgetType::ALL {
            assert_eq!(ty.is_submit_trigger(), ty == WidgetType::Button);
        }
    }

    #[test]
    fn test_label_and_button_produce_no_rule() {
        assert!(!WidgetType::Label.produces_rule());
        assert!(!WidgetType::Button.produces_rule());
        assert!(WidgetType::Text.produces_rule());
        assert!(WidgetType::Password.produces_rule());
        assert!(WidgetType::Radio.produces_rule());
        assert!(WidgetType::Email.produces_rule());
        assert!(WidgetType::Phone.produces_rule());
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&WidgetType::Phone).unwrap();
        assert_eq!(json, "\"phone\"");
        let back: WidgetType = serde_json::from_str("\"radio\"").unwrap();
        assert_eq!(back, WidgetType::Radio);
    }
}
