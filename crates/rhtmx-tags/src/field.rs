// File: src/field.rs
// Purpose: Repopulate form fields from previously submitted values

use crate::attrs::Attrs;
use crate::context::ParamStore;
use crate::tag::Content;

/// Merge submitted values for `name` into the attributes of an input tag
///
/// - `submit` buttons are left alone
/// - `checkbox`/`radio` get `checked="checked"` when their own `value`
///   (default `""`) was submitted; untouched when nothing was submitted
/// - everything else takes the first submitted value as `value`
pub fn populate_input<P>(params: &P, name: &str, attrs: &mut Attrs)
where
    P: ParamStore + ?Sized,
{
    let submitted = params.every_param(name);
    apply_submitted(attrs, &submitted);
}

pub(crate) fn apply_submitted(attrs: &mut Attrs, submitted: &[String]) {
    let kind = attrs.get("type").unwrap_or_default().to_string();

    match kind.as_str() {
        "checkbox" | "radio" if !submitted.is_empty() => {
            let value = attrs.get("value").unwrap_or_default().to_string();
            if submitted.iter().any(|v| *v == value) {
                attrs.set("checked", "checked");
            }
            attrs.set("value", value);
        }
        "submit" | "checkbox" | "radio" => {}
        _ => {
            if let Some(first) = submitted.first() {
                attrs.set("value", first);
            }
        }
    }
}

/// Body of a `<textarea>`: the submitted value, else `default`, else empty
///
/// Never returns [`Content::Empty`]; a textarea is always explicitly closed.
pub fn text_area_content<P>(params: &P, name: &str, default: Content) -> Content
where
    P: ParamStore + ?Sized,
{
    match (params.param(name), default) {
        (Some(submitted), _) => Content::Text(submitted),
        (None, Content::Empty) => Content::text(""),
        (None, default) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Submitted(Vec<&'static str>);

    impl ParamStore for Submitted {
        fn every_param(&self, _name: &str) -> Vec<String> {
            self.0.iter().map(|v| v.to_string()).collect()
        }
    }

    #[test]
    fn test_checkbox_checked_when_value_submitted() {
        let mut attrs = Attrs::new().with("type", "checkbox").with("value", "1");
        populate_input(&Submitted(vec!["1"]), "employed", &mut attrs);

        assert_eq!(attrs.get("checked"), Some("checked"));
        assert_eq!(attrs.get("value"), Some("1"));
    }

    #[test]
    fn test_checkbox_unchecked_when_other_value_submitted() {
        let mut attrs = Attrs::new().with("type", "checkbox").with("value", "1");
        populate_input(&Submitted(vec!["0"]), "employed", &mut attrs);

        assert!(!attrs.contains("checked"));
        assert_eq!(attrs.get("value"), Some("1"));
    }

    #[test]
    fn test_radio_in_group() {
        let mut attrs = Attrs::new().with("type", "radio").with("value", "blue");
        populate_input(&Submitted(vec!["red", "blue"]), "color", &mut attrs);
        assert_eq!(attrs.get("checked"), Some("checked"));
    }

    #[test]
    fn test_checkbox_value_defaults_to_empty() {
        let mut attrs = Attrs::new().with("type", "checkbox");
        populate_input(&Submitted(vec![""]), "agree", &mut attrs);

        assert_eq!(attrs.get("checked"), Some("checked"));
        assert_eq!(attrs.get("value"), Some(""));
    }

    #[test]
    fn test_checkbox_without_submission_is_untouched() {
        let mut attrs = Attrs::new().with("type", "checkbox");
        populate_input(&Submitted(vec![]), "agree", &mut attrs);

        assert!(!attrs.contains("value"));
        assert!(!attrs.contains("checked"));
    }

    #[rstest]
    #[case("text")]
    #[case("email")]
    #[case("hidden")]
    #[case("number")]
    fn test_text_like_takes_first_value(#[case] kind: &str) {
        let mut attrs = Attrs::new().with("type", kind).with("value", "Default");
        populate_input(&Submitted(vec!["X", "Y"]), "name", &mut attrs);
        assert_eq!(attrs.get("value"), Some("X"));
    }

    #[test]
    fn test_default_kept_without_submission() {
        let mut attrs = Attrs::new().with("type", "text").with("value", "Default");
        populate_input(&Submitted(vec![]), "name", &mut attrs);
        assert_eq!(attrs.get("value"), Some("Default"));
    }

    #[test]
    fn test_submit_is_never_populated() {
        let mut attrs = Attrs::new().with("type", "submit").with("value", "Save");
        populate_input(&Submitted(vec!["Other"]), "commit", &mut attrs);
        assert_eq!(attrs.get("value"), Some("Save"));
    }

    #[test]
    fn test_text_area_content() {
        let body = text_area_content(&Submitted(vec!["typed"]), "bio", Content::text("default"));
        assert!(matches!(body, Content::Text(ref t) if t == "typed"));

        let body = text_area_content(&Submitted(vec![]), "bio", Content::text("default"));
        assert!(matches!(body, Content::Text(ref t) if t == "default"));

        let body = text_area_content(&Submitted(vec![]), "bio", Content::Empty);
        assert!(matches!(body, Content::Text(ref t) if t.is_empty()));

        let body = text_area_content(&Submitted(vec![]), "bio", Content::raw("<b>x</b>"));
        assert!(matches!(body, Content::Raw(_)));
    }
}
