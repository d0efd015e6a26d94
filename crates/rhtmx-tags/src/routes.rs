// File: src/routes.rs
// Purpose: Named route table - method metadata for forms and URL generation

use std::collections::{HashMap, HashSet};
use std::iter;
use std::sync::Arc;

use axum::http::Method;
use tracing::warn;

use crate::context::{RouteLookup, UrlResolver, UrlTarget};
use crate::error::{Result, TagsError};

/// A route definition as seen by the tag helpers
///
/// `pattern` is relative to the parent route (`/users` under `/admin`).
/// `via` lists the HTTP methods the route declares; an empty list means
/// "whatever the parent allows".
#[derive(Debug, Clone)]
pub struct Route {
    name: Option<String>,
    pattern: String,
    via: Vec<Method>,
    parent: Option<Arc<Route>>,
}

impl Route {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            name: None,
            pattern: pattern.into(),
            via: Vec::new(),
            parent: None,
        }
    }

    /// Give the route a name usable with `url_for` and `form_for`
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict the route to the given methods
    pub fn via(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.via = methods.into_iter().collect();
        self
    }

    /// Nest the route under `parent`
    pub fn under(mut self, parent: &Arc<Route>) -> Self {
        self.parent = Some(Arc::clone(parent));
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Methods declared by this route alone
    pub fn methods(&self) -> &[Method] {
        &self.via
    }

    pub fn parent(&self) -> Option<&Route> {
        self.parent.as_deref()
    }

    /// This route followed by each of its ancestors up to the root
    pub fn ancestry(&self) -> impl Iterator<Item = &Route> {
        iter::successors(Some(self), |route| route.parent())
    }

    /// Pattern with every ancestor's pattern prefixed
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rhtmx_tags::Route;
    ///
    /// let admin = Arc::new(Route::new("/admin/"));
    /// let users = Route::new("users/:id").under(&admin);
    /// assert_eq!(users.full_pattern(), "/admin/users/:id");
    /// ```
    pub fn full_pattern(&self) -> String {
        let segments: Vec<&str> = self
            .ancestry()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .flat_map(|route| route.pattern.split('/'))
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", segments.join("/"))
        }
    }

    /// Fill placeholders from `params`
    ///
    /// Returns the path and the parameters that were not consumed by a
    /// placeholder. `:id` is required, `:id?` optional and `*rest` takes the
    /// remainder of the path, each `/`-separated piece encoded on its own.
    fn generate_url<'p>(&self, params: &'p [(String, String)]) -> (String, Vec<&'p (String, String)>) {
        let pattern = self.full_pattern();
        let mut used: HashSet<&str> = HashSet::new();
        let lookup = |name: &str| params.iter().find(|(key, _)| key == name).map(|(_, v)| v);

        let segments: Vec<String> = pattern
            .split('/')
            .filter(|segment| !segment.is_empty())
            .filter_map(|segment| match segment.chars().next() {
                Some(':') => {
                    let name = segment.trim_start_matches(':').trim_end_matches('?');
                    match lookup(name) {
                        Some(value) => {
                            used.insert(name);
                            Some(urlencoding::encode(value).into_owned())
                        }
                        None if segment.ends_with('?') => None,
                        None => {
                            warn!("Missing parameter `{}` for route {}", name, pattern);
                            Some(segment.to_string())
                        }
                    }
                }
                Some('*') => {
                    let name = &segment[1..];
                    match lookup(name) {
                        Some(value) => {
                            used.insert(name);
                            let pieces: Vec<String> = value
                                .split('/')
                                .map(|piece| urlencoding::encode(piece).into_owned())
                                .collect();
                            Some(pieces.join("/"))
                        }
                        None => None,
                    }
                }
                _ => Some(segment.to_string()),
            })
            .collect();

        let path = if segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", segments.join("/"))
        };

        let rest = params
            .iter()
            .filter(|(key, _)| !used.contains(key.as_str()))
            .collect();

        (path, rest)
    }
}

/// Registered routes, looked up by name
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    named_routes: HashMap<String, Arc<Route>>,
    base_path: Option<String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every generated path with `base_path` (e.g. "/app")
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let trimmed = base_path.trim_end_matches('/');
        self.base_path = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Register a route, returning a handle usable as a parent
    pub fn add(&mut self, route: Route) -> Result<Arc<Route>> {
        let route = Arc::new(route);

        if let Some(name) = route.name() {
            if self.named_routes.contains_key(name) {
                return Err(TagsError::DuplicateRoute(name.to_string()));
            }
            self.named_routes.insert(name.to_string(), Arc::clone(&route));
        }

        Ok(route)
    }

    /// Gets a route by its name
    pub fn get(&self, name: &str) -> Option<&Arc<Route>> {
        self.named_routes.get(name)
    }

    fn with_base(&self, path: String) -> String {
        match &self.base_path {
            Some(base) if path.starts_with('/') && !path.starts_with("//") => {
                format!("{}{}", base, path)
            }
            _ => path,
        }
    }
}

impl RouteLookup for RouteTable {
    fn lookup_route(&self, name: &str) -> Option<Arc<Route>> {
        self.get(name).cloned()
    }
}

impl UrlResolver for RouteTable {
    fn url_for(&self, target: &UrlTarget) -> String {
        if let Some(route) = self.get(&target.target) {
            let (path, rest) = route.generate_url(&target.params);
            return append_query(self.with_base(path), rest);
        }

        let url = if target.is_absolute_url() {
            target.target.clone()
        } else {
            self.with_base(target.target.clone())
        };
        append_query(url, target.params.iter())
    }
}

/// Append `params` as a query string, keeping any `#fragment` last
fn append_query<'p>(url: String, params: impl IntoIterator<Item = &'p (String, String)>) -> String {
    let query: Vec<String> = params
        .into_iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();

    if query.is_empty() {
        return url;
    }

    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url.as_str(), None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };

    let mut result = format!("{}{}{}", base, separator, query.join("&"));
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    result
}
