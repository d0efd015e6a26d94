// File: src/select.rs
// Purpose: <select> fields with <option>/<optgroup> entries and selection from submitted values

use maud::{Markup, PreEscaped};
use std::collections::HashSet;
use std::fmt::Display;

use crate::attrs::Attrs;
use crate::context::{ParamStore, ValidationState};
use crate::tag::{tag, Content};
use crate::validation::with_validation;

/// A single `<option>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub attrs: Attrs,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            attrs: Attrs::new(),
        }
    }

    /// Extra attribute, applied after `value`/`selected`
    pub fn attr(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.attrs.set(name, value);
        self
    }
}

/// A bare value is both label and value
impl From<&str> for SelectOption {
    fn from(value: &str) -> Self {
        SelectOption::new(value, value)
    }
}

impl From<String> for SelectOption {
    fn from(value: String) -> Self {
        SelectOption::new(value.clone(), value)
    }
}

/// `(label, value)`
impl<L, V> From<(L, V)> for SelectOption
where
    L: Into<String>,
    V: Into<String>,
{
    fn from((label, value): (L, V)) -> Self {
        SelectOption::new(label, value)
    }
}

/// An `<optgroup>` of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
    pub attrs: Attrs,
}

impl OptGroup {
    pub fn new<I, O>(label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<SelectOption>,
    {
        Self {
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
            attrs: Attrs::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.attrs.set(name, value);
        self
    }
}

/// One entry of a select's option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionEntry {
    Single(SelectOption),
    Group(OptGroup),
}

impl From<SelectOption> for OptionEntry {
    fn from(option: SelectOption) -> Self {
        OptionEntry::Single(option)
    }
}

impl From<OptGroup> for OptionEntry {
    fn from(group: OptGroup) -> Self {
        OptionEntry::Group(group)
    }
}

impl From<&str> for OptionEntry {
    fn from(value: &str) -> Self {
        OptionEntry::Single(value.into())
    }
}

impl From<String> for OptionEntry {
    fn from(value: String) -> Self {
        OptionEntry::Single(value.into())
    }
}

impl<L, V> From<(L, V)> for OptionEntry
where
    L: Into<String>,
    V: Into<String>,
{
    fn from(pair: (L, V)) -> Self {
        OptionEntry::Single(pair.into())
    }
}

/// Collect anything convertible into an option list
///
/// ```
/// use rhtmx_tags::{options, OptGroup, OptionEntry};
///
/// let list = options(["de", "en"]);
/// assert_eq!(list.len(), 2);
///
/// let grouped = options([OptionEntry::from(OptGroup::new("Europe", ["de", "fr"])), "us".into()]);
/// assert!(matches!(grouped[0], OptionEntry::Group(_)));
/// ```
pub fn options<I, E>(entries: I) -> Vec<OptionEntry>
where
    I: IntoIterator<Item = E>,
    E: Into<OptionEntry>,
{
    entries.into_iter().map(Into::into).collect()
}

fn render_option(selected: &HashSet<&str>, option: &SelectOption) -> Markup {
    let mut attrs = Attrs::new().with("value", &option.value);
    if selected.contains(option.value.as_str()) {
        attrs.set("selected", "selected");
    }
    let attrs = attrs.merge(option.attrs.clone());

    tag("option", &attrs, Content::text(option.label.as_str()))
}

/// Render option entries, marking every value in `selected`
pub fn render_options(selected: &HashSet<&str>, entries: &[OptionEntry]) -> Markup {
    let mut html = String::new();

    for entry in entries {
        let markup = match entry {
            OptionEntry::Single(option) => render_option(selected, option),
            OptionEntry::Group(group) => {
                let body: String = group
                    .options
                    .iter()
                    .map(|option| render_option(selected, option).into_string())
                    .collect();
                let attrs = Attrs::new()
                    .with("label", &group.label)
                    .merge(group.attrs.clone());
                tag("optgroup", &attrs, Content::Raw(PreEscaped(body)))
            }
        };
        html.push_str(&markup.into_string());
    }

    PreEscaped(html)
}

/// Build a `<select>` for field `name`
pub fn select_field<C>(
    ctx: &C,
    error_class: &str,
    name: &str,
    entries: &[OptionEntry],
    attrs: Attrs,
) -> Markup
where
    C: ParamStore + ValidationState + ?Sized,
{
    let submitted = ctx.every_param(name);
    let selected: HashSet<&str> = submitted.iter().map(String::as_str).collect();

    let body = render_options(&selected, entries);
    let attrs = attrs.with("name", name);

    with_validation(ctx, error_class, name, "select", attrs, Content::Raw(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_and_pair_options() {
        let selected = HashSet::from(["en"]);
        let html = render_options(
            &selected,
            &options([OptionEntry::from("de"), ("English", "en").into()]),
        );
        assert_eq!(
            html.into_string(),
            r#"<option value="de">de</option><option selected="selected" value="en">English</option>"#
        );
    }

    #[test]
    fn test_optgroup() {
        let selected = HashSet::from(["fr"]);
        let group = OptGroup::new("Europe", ["de", "fr"]).attr("class", "eu");
        let html = render_options(&selected, &[group.into()]);
        assert_eq!(
            html.into_string(),
            concat!(
                r#"<optgroup class="eu" label="Europe">"#,
                r#"<option value="de">de</option>"#,
                r#"<option selected="selected" value="fr">fr</option>"#,
                "</optgroup>"
            )
        );
    }

    #[test]
    fn test_extra_attrs_override_selection() {
        let selected = HashSet::from(["x"]);
        let option = SelectOption::new("X", "x")
            .attr("disabled", "disabled")
            .attr("selected", "no");
        let html = render_options(&selected, &[option.into()]);
        assert_eq!(
            html.into_string(),
            r#"<option disabled="disabled" selected="no" value="x">X</option>"#
        );
    }

    #[test]
    fn test_labels_are_escaped() {
        let html = render_options(&HashSet::new(), &[("Fish & Chips", "fc").into()]);
        assert_eq!(
            html.into_string(),
            r#"<option value="fc">Fish &amp; Chips</option>"#
        );
    }
}
