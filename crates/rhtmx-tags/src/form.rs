// File: src/form.rs
// Purpose: <form> tag with action resolution and POST detection from route metadata

use axum::http::Method;
use maud::Markup;
use tracing::debug;

use crate::attrs::Attrs;
use crate::context::{RouteLookup, UrlResolver, UrlTarget};
use crate::routes::Route;
use crate::tag::{tag, Content};

/// Method a form for `route` has to use, if the route rules out GET
///
/// Starts from `{GET, POST}` and walks from the route up to the root. Every
/// level declaring methods narrows the set to the intersection; levels
/// without declarations inherit it unchanged.
pub fn infer_method(route: &Route) -> Option<Method> {
    let mut allowed = vec![Method::GET, Method::POST];

    for level in route.ancestry() {
        let declared = level.methods();
        if !declared.is_empty() {
            allowed.retain(|method| declared.contains(method));
        }
    }

    let post_only = allowed.contains(&Method::POST) && !allowed.contains(&Method::GET);
    post_only.then_some(Method::POST)
}

/// Build a `<form>` tag
///
/// `action` is resolved from `target`. When the target names a route that
/// only accepts POST, `method="POST"` is added. Caller attributes win over
/// both.
pub fn form_for<C>(ctx: &C, target: &UrlTarget, attrs: Attrs, content: Content) -> Markup
where
    C: UrlResolver + RouteLookup + ?Sized,
{
    let mut base = Attrs::new().with("action", ctx.url_for(target));

    if let Some(route) = ctx.lookup_route(&target.target) {
        if let Some(method) = infer_method(&route) {
            debug!(route = %target.target, "Form target only accepts {}", method);
            base.set("method", method.as_str());
        }
    }

    tag("form", &base.merge(attrs), content)
}
