// File: src/helpers.rs
// Purpose: Request-scoped helper set - every named tag helper as a method

use maud::Markup;
use std::fmt::Display;

use crate::assets::{self, AssetSource};
use crate::attrs::Attrs;
use crate::config::TagsConfig;
use crate::context::{HelperContext, UrlTarget};
use crate::field::{populate_input, text_area_content};
use crate::form;
use crate::select::{self, OptionEntry};
use crate::tag::{tag, Content};
use crate::validation::{tag_with_error, with_validation};

/// Generates `<kind>_field` helpers for the input types that repopulate
macro_rules! typed_fields {
    ($($(#[$meta:meta])* $method:ident => $kind:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(&self, name: &str, attrs: Attrs) -> Markup {
                self.typed_input(name, $kind, attrs)
            }
        )+
    };
}

/// Tag helpers bound to one request
///
/// ```
/// use rhtmx_tags::{Attrs, Context, RequestContext, RouteTable, TagHelpers, Params};
///
/// let request = RequestContext::default().with_params(Params::parse("name=Ann"));
/// let routes = RouteTable::new();
/// let ctx = Context::new(&request, &routes);
/// let h = TagHelpers::new(&ctx);
///
/// assert_eq!(
///     h.text_field("name", Attrs::new()).into_string(),
///     r#"<input name="name" type="text" value="Ann" />"#
/// );
/// ```
pub struct TagHelpers<'a, C: ?Sized> {
    ctx: &'a C,
    config: &'a TagsConfig,
}

impl<'a, C> TagHelpers<'a, C>
where
    C: HelperContext + ?Sized,
{
    /// Helpers using the default configuration
    pub fn new(ctx: &'a C) -> Self {
        Self::with_config(ctx, TagsConfig::global())
    }

    pub fn with_config(ctx: &'a C, config: &'a TagsConfig) -> Self {
        Self { ctx, config }
    }

    pub fn context(&self) -> &'a C {
        self.ctx
    }

    pub fn config(&self) -> &'a TagsConfig {
        self.config
    }

    // ========================================================================
    // Generic tags
    // ========================================================================

    pub fn tag(&self, name: &str, attrs: Attrs, content: Content) -> Markup {
        tag(name, &attrs, content)
    }

    /// Same as [`TagHelpers::tag`] but always marked with the error class
    pub fn tag_with_error(&self, name: &str, attrs: Attrs, content: Content) -> Markup {
        tag_with_error(name, attrs, content, &self.config.error_class)
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// `<input>` with the type taken from `attrs` (defaults to a plain input)
    ///
    /// `name` always wins over a caller `name` attribute, so the control
    /// posts under the key it is repopulated from.
    pub fn input_tag(&self, name: &str, attrs: Attrs) -> Markup {
        let mut attrs = attrs.with("name", name);
        populate_input(self.ctx, name, &mut attrs);
        self.bound(name, "input", attrs, Content::Empty)
    }

    fn typed_input(&self, name: &str, kind: &str, attrs: Attrs) -> Markup {
        self.input_tag(name, attrs.with("type", kind))
    }

    typed_fields! {
        color_field => "color",
        date_field => "date",
        datetime_field => "datetime",
        email_field => "email",
        month_field => "month",
        number_field => "number",
        /// Bounds come from the caller: `Attrs::new().with("min", 0).with("max", 10)`
        range_field => "range",
        search_field => "search",
        tel_field => "tel",
        /// `<input type="text">`, pass a default as the `value` attribute
        text_field => "text",
        time_field => "time",
        url_field => "url",
        week_field => "week",
    }

    /// Password inputs are never repopulated
    pub fn password_field(&self, name: &str, attrs: Attrs) -> Markup {
        let attrs = attrs.with("name", name).with("type", "password");
        self.bound(name, "input", attrs, Content::Empty)
    }

    pub fn hidden_field(&self, name: &str, value: impl Display, attrs: Attrs) -> Markup {
        let attrs = Attrs::new()
            .with("value", value)
            .merge(attrs)
            .with("name", name)
            .with("type", "hidden");
        tag("input", &attrs, Content::Empty)
    }

    pub fn file_field(&self, name: &str, attrs: Attrs) -> Markup {
        let attrs = attrs.with("name", name).with("type", "file");
        tag("input", &attrs, Content::Empty)
    }

    pub fn check_box(&self, name: &str, value: impl Display, attrs: Attrs) -> Markup {
        let attrs = Attrs::new().with("value", value).merge(attrs);
        self.typed_input(name, "checkbox", attrs)
    }

    pub fn radio_button(&self, name: &str, value: impl Display, attrs: Attrs) -> Markup {
        let attrs = Attrs::new().with("value", value).merge(attrs);
        self.typed_input(name, "radio", attrs)
    }

    /// `<input type="submit">` labelled `label`, or the configured default
    pub fn submit_button(&self, label: Option<&str>, attrs: Attrs) -> Markup {
        let attrs = Attrs::new()
            .with("value", label.unwrap_or(self.config.submit_label.as_str()))
            .merge(attrs)
            .with("type", "submit");
        tag("input", &attrs, Content::Empty)
    }

    /// Hidden field carrying the request's CSRF token
    pub fn csrf_field(&self, attrs: Attrs) -> Markup {
        self.hidden_field(&self.config.csrf_field, self.ctx.csrf_token(), attrs)
    }

    // ========================================================================
    // Other form elements
    // ========================================================================

    pub fn label_for(&self, name: &str, content: Content, attrs: Attrs) -> Markup {
        let attrs = Attrs::new().with("for", name).merge(attrs);
        self.bound(name, "label", attrs, content)
    }

    /// `<textarea>` showing the submitted value, else `default`
    pub fn text_area(&self, name: &str, default: Content, attrs: Attrs) -> Markup {
        let content = text_area_content(self.ctx, name, default);
        self.bound(name, "textarea", attrs.with("name", name), content)
    }

    pub fn select_field(&self, name: &str, options: &[OptionEntry], attrs: Attrs) -> Markup {
        select::select_field(self.ctx, &self.config.error_class, name, options, attrs)
    }

    pub fn form_for(&self, target: impl Into<UrlTarget>, attrs: Attrs, content: Content) -> Markup {
        form::form_for(self.ctx, &target.into(), attrs, content)
    }

    // ========================================================================
    // Links and assets
    // ========================================================================

    pub fn link_to(&self, target: impl Into<UrlTarget>, attrs: Attrs, content: Content) -> Markup {
        assets::link_to(self.ctx, &target.into(), attrs, content)
    }

    pub fn image(&self, target: impl Into<UrlTarget>, attrs: Attrs) -> Markup {
        assets::image(self.ctx, &target.into(), attrs)
    }

    pub fn javascript(&self, source: AssetSource, attrs: Attrs) -> Markup {
        assets::javascript(self.ctx, &source, attrs)
    }

    pub fn stylesheet(&self, source: AssetSource, attrs: Attrs) -> Markup {
        assets::stylesheet(self.ctx, &source, attrs)
    }

    fn bound(&self, field: &str, name: &str, attrs: Attrs, content: Content) -> Markup {
        with_validation(self.ctx, &self.config.error_class, field, name, attrs, content)
    }
}

impl<C: ?Sized> Clone for TagHelpers<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for TagHelpers<'_, C> {}
