// File: src/validation.rs
// Purpose: Mark fields that failed validation with an error class

use maud::Markup;
use tracing::trace;

use crate::attrs::Attrs;
use crate::context::ValidationState;
use crate::tag::{tag, Content};

/// Build a tag with `error_class` appended to its `class` attribute
pub fn tag_with_error(name: &str, mut attrs: Attrs, content: Content, error_class: &str) -> Markup {
    append_class(&mut attrs, error_class);
    tag(name, &attrs, content)
}

/// Build a tag for form field `field`, decorating it if the field has an error
pub fn with_validation<V>(
    state: &V,
    error_class: &str,
    field: &str,
    name: &str,
    attrs: Attrs,
    content: Content,
) -> Markup
where
    V: ValidationState + ?Sized,
{
    if !state.has_error(field) {
        return tag(name, &attrs, content);
    }

    trace!(field, "Marking <{}> with {}", name, error_class);
    tag_with_error(name, attrs, content, error_class)
}

fn append_class(attrs: &mut Attrs, class: &str) {
    let merged = match attrs.get("class") {
        Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
        _ => class.to_string(),
    };
    attrs.set("class", merged);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIELD_WITH_ERROR;
    use pretty_assertions::assert_eq;

    struct Errors(&'static [&'static str]);

    impl ValidationState for Errors {
        fn has_error(&self, field: &str) -> bool {
            self.0.iter().any(|f| *f == field)
        }
    }

    #[test]
    fn test_no_error_is_unchanged() {
        let html = with_validation(
            &Errors(&[]),
            FIELD_WITH_ERROR,
            "email",
            "input",
            Attrs::new().with("class", "foo"),
            Content::Empty,
        );
        assert_eq!(html.into_string(), r#"<input class="foo" />"#);
    }

    #[test]
    fn test_error_appends_to_existing_class() {
        let html = with_validation(
            &Errors(&["email"]),
            FIELD_WITH_ERROR,
            "email",
            "input",
            Attrs::new().with("class", "foo"),
            Content::Empty,
        );
        assert_eq!(html.into_string(), r#"<input class="foo field-with-error" />"#);
    }

    #[test]
    fn test_error_sets_class() {
        let html = with_validation(
            &Errors(&["email"]),
            FIELD_WITH_ERROR,
            "email",
            "input",
            Attrs::new(),
            Content::Empty,
        );
        assert_eq!(html.into_string(), r#"<input class="field-with-error" />"#);
    }

    #[test]
    fn test_error_on_other_field_is_ignored() {
        let html = with_validation(
            &Errors(&["name"]),
            FIELD_WITH_ERROR,
            "email",
            "label",
            Attrs::new(),
            Content::text("Email"),
        );
        assert_eq!(html.into_string(), "<label>Email</label>");
    }

    #[test]
    fn test_tag_with_error_keeps_content() {
        let html = tag_with_error("div", Attrs::new().with_empty("class"), Content::text("x"), "bad");
        assert_eq!(html.into_string(), r#"<div class="bad">x</div>"#);
    }
}
