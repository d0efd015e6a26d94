// File: src/assets.rs
// Purpose: Links, images, scripts and stylesheets

use maud::{Markup, PreEscaped};

use crate::attrs::Attrs;
use crate::context::{UrlResolver, UrlTarget};
use crate::tag::{tag, Content};

/// Source of a script or stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Reference an external file
    Url(UrlTarget),
    /// Embed the body in the page; it is not escaped
    Inline(String),
}

impl AssetSource {
    pub fn url(target: impl Into<UrlTarget>) -> Self {
        AssetSource::Url(target.into())
    }

    pub fn inline(body: impl Into<String>) -> Self {
        AssetSource::Inline(body.into())
    }
}

/// `<a href="...">`; an empty body shows the target itself
pub fn link_to<R>(resolver: &R, target: &UrlTarget, attrs: Attrs, content: Content) -> Markup
where
    R: UrlResolver + ?Sized,
{
    let content = match content {
        Content::Empty => Content::text(target.target.as_str()),
        content => content,
    };
    let attrs = Attrs::new()
        .with("href", resolver.url_for(target))
        .merge(attrs);

    tag("a", &attrs, content)
}

pub fn image<R>(resolver: &R, target: &UrlTarget, attrs: Attrs) -> Markup
where
    R: UrlResolver + ?Sized,
{
    let attrs = Attrs::new()
        .with("src", resolver.url_for(target))
        .merge(attrs);

    tag("img", &attrs, Content::Empty)
}

/// `<script>` referencing a file, or wrapping an inline body in CDATA
///
/// Script tags are always explicitly closed.
pub fn javascript<R>(resolver: &R, source: &AssetSource, attrs: Attrs) -> Markup
where
    R: UrlResolver + ?Sized,
{
    match source {
        AssetSource::Url(target) => {
            let attrs = Attrs::new()
                .with("src", resolver.url_for(target))
                .merge(attrs);
            tag("script", &attrs, Content::raw(""))
        }
        AssetSource::Inline(body) => {
            let wrapped = format!("//<![CDATA[\n{}\n//]]>", body);
            tag("script", &attrs, Content::Raw(PreEscaped(wrapped)))
        }
    }
}

/// `<link rel="stylesheet">` for a file, or `<style>` wrapping an inline body
pub fn stylesheet<R>(resolver: &R, source: &AssetSource, attrs: Attrs) -> Markup
where
    R: UrlResolver + ?Sized,
{
    match source {
        AssetSource::Url(target) => {
            let attrs = Attrs::new()
                .with("href", resolver.url_for(target))
                .with("rel", "stylesheet")
                .merge(attrs);
            tag("link", &attrs, Content::Empty)
        }
        AssetSource::Inline(body) => {
            let wrapped = format!("/*<![CDATA[*/\n{}\n/*]]>*/", body);
            tag("style", &attrs, Content::Raw(PreEscaped(wrapped)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Resolves everything to `/static/<target>`
    struct Static;

    impl UrlResolver for Static {
        fn url_for(&self, target: &UrlTarget) -> String {
            format!("/static/{}", target.target.trim_start_matches('/'))
        }
    }

    #[test]
    fn test_link_defaults_to_target_text() {
        let html = link_to(&Static, &"about".into(), Attrs::new(), Content::Empty);
        assert_eq!(html.into_string(), r#"<a href="/static/about">about</a>"#);
    }

    #[test]
    fn test_link_with_content() {
        let html = link_to(
            &Static,
            &"about".into(),
            Attrs::new().with("class", "nav"),
            Content::text("About & Contact"),
        );
        assert_eq!(
            html.into_string(),
            r#"<a class="nav" href="/static/about">About &amp; Contact</a>"#
        );
    }

    #[test]
    fn test_image() {
        let html = image(&Static, &"logo.png".into(), Attrs::new().with("alt", "Logo"));
        assert_eq!(html.into_string(), r#"<img alt="Logo" src="/static/logo.png" />"#);
    }

    #[test]
    fn test_javascript_url() {
        let html = javascript(&Static, &AssetSource::url("app.js"), Attrs::new());
        assert_eq!(html.into_string(), r#"<script src="/static/app.js"></script>"#);
    }

    #[test]
    fn test_javascript_inline() {
        let html = javascript(&Static, &AssetSource::inline("if (a < b) go();"), Attrs::new());
        assert_eq!(
            html.into_string(),
            "<script>//<![CDATA[\nif (a < b) go();\n//]]></script>"
        );
    }

    #[test]
    fn test_stylesheet_url() {
        let html = stylesheet(&Static, &AssetSource::url("app.css"), Attrs::new().with("media", "print"));
        assert_eq!(
            html.into_string(),
            r#"<link href="/static/app.css" media="print" rel="stylesheet" />"#
        );
    }

    #[test]
    fn test_stylesheet_inline() {
        let html = stylesheet(&Static, &AssetSource::inline("a > b { color: red }"), Attrs::new());
        assert_eq!(
            html.into_string(),
            "<style>/*<![CDATA[*/\na > b { color: red }\n/*]]>*/</style>"
        );
    }
}
