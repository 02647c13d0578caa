//! HTML preview rendering for placed widgets.
//!
//! This is the in-repo stand-in for the interactive rendering
//! collaborator: a pure widget-to-markup function set used to preview the
//! assembled form. Each widget renders with its current value and, when
//! the last submission rejected it, its inline error message.

use crate::catalog::WidgetType;
use crate::model::{FormModel, Widget};

/// Renders the inline error paragraph, or nothing when the field has no
/// error.
fn render_error(error: Option<&str>) -> String {
    error.map_or_else(String::new, |message| {
        format!(r#"<p class="field-error">{message}</p>"#)
    })
}

/// Renders a single placed widget as HTML.
///
/// `value` is the field's current input (if any) and `error` the message
/// from the last submission attempt (if any). Presentational widgets
/// ignore both.
pub fn render_widget(widget: &Widget, value: Option<&str>, error: Option<&str>) -> String {
    let name = &widget.name;
    match widget.widget_type {
        WidgetType::Label => format!(r#"<div class="form-label">{name}</div>"#),
        WidgetType::Button => format!(r#"<button type="submit">{name}</button>"#),
        WidgetType::Text => {
            let val = value.unwrap_or("");
            format!(
                r#"<label>{name}: <input type="text" name="{name}" value="{val}" />{}</label>"#,
                render_error(error)
            )
        }
        // Passwords never echo the current value back into the markup.
        WidgetType::Password => format!(
            r#"<label>{name}: <input type="password" name="{name}" value="" />{}</label>"#,
            render_error(error)
        ),
        WidgetType::Radio => {
            let mut html = format!(r#"<fieldset><legend>{name}</legend>"#);
            for option in &widget.options {
                let checked = if value == Some(option.as_str()) {
                    " checked"
                } else {
                    ""
                };
                html.push_str(&format!(
                    r#"<label><input type="radio" name="{name}" value="{option}"{checked} />{option}</label>"#
                ));
            }
            html.push_str(&render_error(error));
            html.push_str("</fieldset>");
            html
        }
        WidgetType::Email => {
            let val = value.unwrap_or("");
            format!(
                r#"<label>Email: <input type="email" name="{name}" value="{val}" />{}</label>"#,
                render_error(error)
            )
        }
        WidgetType::Phone => {
            let val = value.unwrap_or("");
            format!(
                r#"<label>{name}: <input type="tel" name="{name}" value="{val}" />{}</label>"#,
                render_error(error)
            )
        }
    }
}

/// Renders the whole form preview: every placed widget in placement
/// order, wrapped in a `<form>` element.
pub fn render_form(form: &FormModel) -> String {
    let mut html = String::from("<form>");
    for widget in form.widgets() {
        html.push_str(&render_widget(
            widget,
            form.value(&widget.name),
            form.error(&widget.name),
        ));
    }
    html.push_str("</form>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(widget_type: WidgetType, name: &str, options: &[&str]) -> Widget {
        Widget {
            id: 1,
            widget_type,
            name: name.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_label_renders_name_only() {
        let html = render_widget(&widget(WidgetType::Label, "Heading", &[]), None, None);
        assert_eq!(html, r#"<div class="form-label">Heading</div>"#);
    }

    #[test]
    fn test_text_renders_value_and_error() {
        let html = render_widget(
            &widget(WidgetType::Text, "Username", &[]),
            Some("abc"),
            Some("Username must be atleast 4 character"),
        );
        assert!(html.contains(r#"value="abc""#));
        assert!(html.contains("Username must be atleast 4 character"));
    }

    #[test]
    fn test_password_never_echoes_value() {
        let html = render_widget(
            &widget(WidgetType::Password, "Secret", &[]),
            Some("hunter42"),
            None,
        );
        assert!(html.contains(r#"value="""#));
        assert!(!html.contains("hunter42"));
    }

    #[test]
    fn test_radio_renders_one_input_per_option() {
        let html = render_widget(
            &widget(WidgetType::Radio, "Color", &["Red", "Blue"]),
            Some("Blue"),
            None,
        );
        assert_eq!(html.matches(r#"type="radio""#).count(), 2);
        assert!(html.contains(r#"value="Blue" checked"#));
        assert!(!html.contains(r#"value="Red" checked"#));
    }

    #[test]
    fn test_no_error_paragraph_without_error() {
        let html = render_widget(&widget(WidgetType::Phone, "Mobile", &[]), None, None);
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn test_render_form_joins_widgets_in_order() {
        let mut form = FormModel::new();
        form.place(WidgetType::Label, "Sign up", Vec::new());
        form.place(WidgetType::Text, "Username", Vec::new());
        form.place(WidgetType::Button, "Submit", Vec::new());
        let html = render_form(&form);
        assert!(html.starts_with("<form>"));
        assert!(html.ends_with("</form>"));
        let label_at = html.find("Sign up").unwrap();
        let input_at = html.find("Username").unwrap();
        let button_at = html.find("<button").unwrap();
        assert!(label_at < input_at && input_at < button_at);
    }

    #[test]
    fn test_render_form_surfaces_submission_errors() {
        let mut form = FormModel::new();
        form.place(WidgetType::Email, "Contact", Vec::new());
        form.set_value("Contact", "not-an-email");
        form.submit();
        let html = render_form(&form);
        assert!(html.contains("Contact must be a valid email address"));
    }
}
