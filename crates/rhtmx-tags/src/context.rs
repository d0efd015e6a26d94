// File: src/context.rs
// Purpose: Collaborator interfaces the helpers read from (URLs, params, validation, CSRF, routes)

use std::fmt::Display;
use std::sync::Arc;

use crate::routes::Route;

/// Where a URL points: a route name, a path or an absolute URL, plus parameters
///
/// Parameters fill route placeholders first; whatever is left becomes the
/// query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTarget {
    pub target: String,
    pub params: Vec<(String, String)>,
}

impl UrlTarget {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter
    pub fn param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Check if the target is a full URL (`https://...`, `//cdn...`)
    pub fn is_absolute_url(&self) -> bool {
        self.target.contains("://") || self.target.starts_with("//")
    }
}

impl From<&str> for UrlTarget {
    fn from(target: &str) -> Self {
        UrlTarget::new(target)
    }
}

impl From<String> for UrlTarget {
    fn from(target: String) -> Self {
        UrlTarget::new(target)
    }
}

impl From<&UrlTarget> for UrlTarget {
    fn from(target: &UrlTarget) -> Self {
        target.clone()
    }
}

/// Turns a route name, path or URL into an `href`
pub trait UrlResolver {
    fn url_for(&self, target: &UrlTarget) -> String;
}

/// Previously submitted request parameters
pub trait ParamStore {
    /// All values submitted under `name`, in submission order
    fn every_param(&self, name: &str) -> Vec<String>;

    /// First value submitted under `name`
    fn param(&self, name: &str) -> Option<String> {
        self.every_param(name).into_iter().next()
    }
}

/// Per-field validation results for the current request
pub trait ValidationState {
    fn has_error(&self, field: &str) -> bool;
}

pub trait CsrfTokens {
    fn csrf_token(&self) -> String;
}

/// Access to registered routes by name
pub trait RouteLookup {
    fn lookup_route(&self, name: &str) -> Option<Arc<Route>>;
}

/// Everything a helper may consult while rendering
///
/// Implemented automatically for any type providing all collaborator traits.
pub trait HelperContext: UrlResolver + ParamStore + ValidationState + CsrfTokens + RouteLookup {}

impl<T> HelperContext for T where
    T: UrlResolver + ParamStore + ValidationState + CsrfTokens + RouteLookup + ?Sized
{
}
