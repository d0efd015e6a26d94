// File: src/tag.rs
// Purpose: Generic tag builder - attribute serialization, escaping, content modes

use maud::{Markup, PreEscaped, Render};

use crate::attrs::Attrs;

/// Body of a generated tag
///
/// - `Empty` renders a self-closing tag (`<br />`)
/// - `Text` is HTML-escaped before it is inserted
/// - `Raw` is inserted as-is; the caller vouches for it
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Raw(Markup),
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Content::Raw(PreEscaped(markup.into()))
    }

    /// Render a body from a closure, e.g. a nested `html!` block
    ///
    /// ```
    /// use rhtmx_tags::{tag, Attrs, Content};
    /// use maud::html;
    ///
    /// let form = tag("form", &Attrs::new(), Content::from_fn(|| html! { b { "hi" } }));
    /// assert_eq!(form.into_string(), "<form><b>hi</b></form>");
    /// ```
    pub fn from_fn<F>(producer: F) -> Self
    where
        F: FnOnce() -> Markup,
    {
        Content::Raw(producer())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::text(text)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Markup> for Content {
    fn from(markup: Markup) -> Self {
        Content::Raw(markup)
    }
}

/// Escape text for embedding in HTML (`&`, `<`, `>`, `"`)
pub fn escape(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    text.render_to(&mut buffer);
    buffer
}

/// Build a tag
///
/// ```
/// use rhtmx_tags::{tag, Attrs, Content};
///
/// assert_eq!(tag("div", &Attrs::new(), Content::Empty).into_string(), "<div />");
/// assert_eq!(
///     tag("p", &Attrs::new().with("id", "x"), Content::text("a < b")).into_string(),
///     r#"<p id="x">a &lt; b</p>"#
/// );
/// ```
pub fn tag(name: &str, attrs: &Attrs, content: Content) -> Markup {
    debug_assert!(!name.is_empty(), "tag name must not be empty");

    let mut html = String::new();
    html.push('<');
    html.push_str(name);

    for (key, value) in attrs.flatten() {
        html.push(' ');
        html.push_str(&key);
        html.push_str("=\"");
        value.render_to(&mut html);
        html.push('"');
    }

    match content {
        Content::Empty => {
            html.push_str(" />");
            return PreEscaped(html);
        }
        Content::Text(text) => {
            html.push('>');
            text.render_to(&mut html);
        }
        Content::Raw(markup) => {
            html.push('>');
            html.push_str(&markup.into_string());
        }
    }

    html.push_str("</");
    html.push_str(name);
    html.push('>');

    PreEscaped(html)
}
