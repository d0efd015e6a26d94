// File: src/plugin.rs
// Purpose: Helper names and registration with a host templating layer

use maud::Markup;
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::debug;

use crate::assets::AssetSource;
use crate::attrs::Attrs;
use crate::context::{HelperContext, UrlTarget};
use crate::error::TagsError;
use crate::helpers::TagHelpers;
use crate::select::OptionEntry;
use crate::tag::Content;

/// Every helper provided by [`TagHelpers`](crate::TagHelpers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Helper {
    CheckBox,
    ColorField,
    CsrfField,
    DateField,
    DatetimeField,
    EmailField,
    FileField,
    FormFor,
    HiddenField,
    Image,
    InputTag,
    Javascript,
    LabelFor,
    LinkTo,
    MonthField,
    NumberField,
    PasswordField,
    RadioButton,
    RangeField,
    SearchField,
    SelectField,
    Stylesheet,
    SubmitButton,
    Tag,
    TagWithError,
    TelField,
    TextArea,
    TextField,
    TimeField,
    UrlField,
    WeekField,
}

impl Helper {
    pub const ALL: [Helper; 31] = [
        Helper::CheckBox,
        Helper::ColorField,
        Helper::CsrfField,
        Helper::DateField,
        Helper::DatetimeField,
        Helper::EmailField,
        Helper::FileField,
        Helper::FormFor,
        Helper::HiddenField,
        Helper::Image,
        Helper::InputTag,
        Helper::Javascript,
        Helper::LabelFor,
        Helper::LinkTo,
        Helper::MonthField,
        Helper::NumberField,
        Helper::PasswordField,
        Helper::RadioButton,
        Helper::RangeField,
        Helper::SearchField,
        Helper::SelectField,
        Helper::Stylesheet,
        Helper::SubmitButton,
        Helper::Tag,
        Helper::TagWithError,
        Helper::TelField,
        Helper::TextArea,
        Helper::TextField,
        Helper::TimeField,
        Helper::UrlField,
        Helper::WeekField,
    ];

    /// Name the helper is registered under
    pub fn name(self) -> &'static str {
        match self {
            Helper::CheckBox => "check_box",
            Helper::ColorField => "color_field",
            Helper::CsrfField => "csrf_field",
            Helper::DateField => "date_field",
            Helper::DatetimeField => "datetime_field",
            Helper::EmailField => "email_field",
            Helper::FileField => "file_field",
            Helper::FormFor => "form_for",
            Helper::HiddenField => "hidden_field",
            Helper::Image => "image",
            Helper::InputTag => "input_tag",
            Helper::Javascript => "javascript",
            Helper::LabelFor => "label_for",
            Helper::LinkTo => "link_to",
            Helper::MonthField => "month_field",
            Helper::NumberField => "number_field",
            Helper::PasswordField => "password_field",
            Helper::RadioButton => "radio_button",
            Helper::RangeField => "range_field",
            Helper::SearchField => "search_field",
            Helper::SelectField => "select_field",
            Helper::Stylesheet => "stylesheet",
            Helper::SubmitButton => "submit_button",
            Helper::Tag => "tag",
            Helper::TagWithError => "tag_with_error",
            Helper::TelField => "tel_field",
            Helper::TextArea => "text_area",
            Helper::TextField => "text_field",
            Helper::TimeField => "time_field",
            Helper::UrlField => "url_field",
            Helper::WeekField => "week_field",
        }
    }

    /// Render this helper with loosely typed arguments
    ///
    /// This is how a host that only knows helpers by name invokes them.
    /// `args.name` is the field name (the tag name for `tag` and
    /// `tag_with_error`); link, form and image helpers fall back to it as
    /// their target, script and stylesheet helpers as their URL.
    ///
    /// ```
    /// use rhtmx_tags::{Context, Helper, HelperArgs, Params, RequestContext, RouteTable, TagHelpers};
    ///
    /// let request = RequestContext::new().with_params(Params::parse("q=rust"));
    /// let routes = RouteTable::new();
    /// let ctx = Context::new(&request, &routes);
    /// let helpers = TagHelpers::new(&ctx);
    ///
    /// let html = "search_field".parse::<Helper>().unwrap().call(&helpers, HelperArgs::new("q"));
    /// assert_eq!(html.into_string(), r#"<input name="q" type="search" value="rust" />"#);
    /// ```
    pub fn call<C>(self, helpers: &TagHelpers<'_, C>, args: HelperArgs) -> Markup
    where
        C: HelperContext + ?Sized,
    {
        let HelperArgs {
            name,
            value,
            target,
            source,
            options,
            attrs,
            content,
        } = args;
        let value = value.unwrap_or_default();
        let url_target = || target.clone().unwrap_or_else(|| UrlTarget::new(name.as_str()));
        let asset_source = || {
            source
                .clone()
                .unwrap_or_else(|| AssetSource::Url(UrlTarget::new(name.as_str())))
        };

        match self {
            Helper::CheckBox => helpers.check_box(&name, value, attrs),
            Helper::ColorField => helpers.color_field(&name, attrs),
            Helper::CsrfField => helpers.csrf_field(attrs),
            Helper::DateField => helpers.date_field(&name, attrs),
            Helper::DatetimeField => helpers.datetime_field(&name, attrs),
            Helper::EmailField => helpers.email_field(&name, attrs),
            Helper::FileField => helpers.file_field(&name, attrs),
            Helper::FormFor => helpers.form_for(url_target(), attrs, content),
            Helper::HiddenField => helpers.hidden_field(&name, value, attrs),
            Helper::Image => helpers.image(url_target(), attrs),
            Helper::InputTag => helpers.input_tag(&name, attrs),
            Helper::Javascript => helpers.javascript(asset_source(), attrs),
            Helper::LabelFor => helpers.label_for(&name, content, attrs),
            Helper::LinkTo => helpers.link_to(url_target(), attrs, content),
            Helper::MonthField => helpers.month_field(&name, attrs),
            Helper::NumberField => helpers.number_field(&name, attrs),
            Helper::PasswordField => helpers.password_field(&name, attrs),
            Helper::RadioButton => helpers.radio_button(&name, value, attrs),
            Helper::RangeField => helpers.range_field(&name, attrs),
            Helper::SearchField => helpers.search_field(&name, attrs),
            Helper::SelectField => helpers.select_field(&name, &options, attrs),
            Helper::Stylesheet => helpers.stylesheet(asset_source(), attrs),
            Helper::SubmitButton => {
                let label = (!value.is_empty()).then_some(value.as_str());
                helpers.submit_button(label, attrs)
            }
            Helper::Tag => helpers.tag(&name, attrs, content),
            Helper::TagWithError => helpers.tag_with_error(&name, attrs, content),
            Helper::TelField => helpers.tel_field(&name, attrs),
            Helper::TextArea => helpers.text_area(&name, content, attrs),
            Helper::TextField => helpers.text_field(&name, attrs),
            Helper::TimeField => helpers.time_field(&name, attrs),
            Helper::UrlField => helpers.url_field(&name, attrs),
            Helper::WeekField => helpers.week_field(&name, attrs),
        }
    }
}

/// Arguments for [`Helper::call`]
///
/// Each helper reads the fields it needs and ignores the rest.
#[derive(Debug, Clone, Default)]
pub struct HelperArgs {
    pub name: String,
    /// Value of hidden fields, check boxes and radio buttons; submit label
    pub value: Option<String>,
    pub target: Option<UrlTarget>,
    pub source: Option<AssetSource>,
    pub options: Vec<OptionEntry>,
    pub attrs: Attrs,
    pub content: Content,
}

impl HelperArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn value(mut self, value: impl Display) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn target(mut self, target: impl Into<UrlTarget>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn source(mut self, source: AssetSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn options(mut self, options: Vec<OptionEntry>) -> Self {
        self.options = options;
        self
    }

    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }
}

impl fmt::Display for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Helper {
    type Err = TagsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Helper::ALL
            .into_iter()
            .find(|helper| helper.name() == name)
            .ok_or_else(|| TagsError::UnknownHelper(name.to_string()))
    }
}

/// A templating layer that can expose helpers by name
///
/// The host keeps the [`Helper`] and renders it per request with
/// [`Helper::call`].
pub trait HelperHost {
    fn add_helper(&mut self, name: &'static str, helper: Helper);
}

/// Announce every helper to `host`
pub fn register<H>(host: &mut H)
where
    H: HelperHost + ?Sized,
{
    for helper in Helper::ALL {
        host.add_helper(helper.name(), helper);
    }
    debug!("Registered {} tag helpers", Helper::ALL.len());
}
