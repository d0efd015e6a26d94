// File: src/request_context.rs
// Purpose: Request-scoped data the helpers read - submitted params, validation errors, CSRF token

use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;

use crate::context::{CsrfTokens, ParamStore, RouteLookup, UrlResolver, UrlTarget, ValidationState};
use crate::routes::{Route, RouteTable};

/// Submitted request parameters
///
/// Multi-valued and ordered: a checkbox group submits several values under
/// one name and the first one wins for text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URL-encoded string (`a=1&b=two+words`)
    ///
    /// Used for both query strings and `application/x-www-form-urlencoded`
    /// bodies.
    pub fn parse(encoded: &str) -> Self {
        let values = encoded
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { values }
    }

    /// Create from a single-valued map
    pub fn from_map(map: HashMap<String, String>) -> Self {
        let mut values: Vec<(String, String)> = map.into_iter().collect();
        // HashMap order is random; keep output deterministic
        values.sort();
        Self { values }
    }

    /// Create from a JSON object
    ///
    /// Arrays become repeated values, `null` is skipped and other
    /// non-string scalars are stored in their JSON form.
    pub fn from_json(json: &JsonValue) -> Self {
        let mut params = Self::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                match value {
                    JsonValue::Array(items) => {
                        for item in items {
                            if let Some(item) = json_scalar(item) {
                                params.append(key.clone(), item);
                            }
                        }
                    }
                    other => {
                        if let Some(value) = json_scalar(other) {
                            params.append(key.clone(), value);
                        }
                    }
                }
            }
        }

        params
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.push((key.into(), value.into()));
    }

    /// Add every value from `other` after the existing ones
    pub fn extend(&mut self, other: Params) {
        self.values.extend(other.values);
    }

    /// Get the first value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a key, in submission order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn json_scalar(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Request context passed to the tag helpers
#[derive(Clone, Default)]
pub struct RequestContext {
    /// Query and form parameters, query first
    params: Params,

    /// Validation errors from the last submission (field -> message)
    validation_errors: HashMap<String, String>,

    csrf_token: String,
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("params", &self.params.len())
            .field("errors", &self.validation_errors.len())
            .finish()
    }
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add submitted parameters (query string or form body)
    pub fn with_params(mut self, params: Params) -> Self {
        self.params.extend(params);
        self
    }

    /// Set validation errors
    pub fn with_validation_errors(mut self, errors: HashMap<String, String>) -> Self {
        self.validation_errors = errors;
        self
    }

    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = token.into();
        self
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Record a validation error for a field
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.validation_errors.insert(field.into(), message.into());
    }

    /// Get error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.validation_errors.get(field)
    }

    /// Check if there are validation errors
    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }
}

impl ParamStore for RequestContext {
    fn every_param(&self, name: &str) -> Vec<String> {
        self.params
            .get_all(name)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn param(&self, name: &str) -> Option<String> {
        self.params.get(name).map(str::to_string)
    }
}

impl ValidationState for RequestContext {
    fn has_error(&self, field: &str) -> bool {
        self.validation_errors.contains_key(field)
    }
}

impl CsrfTokens for RequestContext {
    fn csrf_token(&self) -> String {
        self.csrf_token.clone()
    }
}

/// A request paired with the application's routes
///
/// This is the complete [`HelperContext`](crate::HelperContext) handed to
/// [`TagHelpers`](crate::TagHelpers) for one request.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub request: &'a RequestContext,
    pub routes: &'a RouteTable,
}

impl<'a> Context<'a> {
    pub fn new(request: &'a RequestContext, routes: &'a RouteTable) -> Self {
        Self { request, routes }
    }
}

impl UrlResolver for Context<'_> {
    fn url_for(&self, target: &UrlTarget) -> String {
        self.routes.url_for(target)
    }
}

impl RouteLookup for Context<'_> {
    fn lookup_route(&self, name: &str) -> Option<Arc<Route>> {
        self.routes.lookup_route(name)
    }
}

impl ParamStore for Context<'_> {
    fn every_param(&self, name: &str) -> Vec<String> {
        self.request.every_param(name)
    }

    fn param(&self, name: &str) -> Option<String> {
        self.request.param(name)
    }
}

impl ValidationState for Context<'_> {
    fn has_error(&self, field: &str) -> bool {
        self.request.has_error(field)
    }
}

impl CsrfTokens for Context<'_> {
    fn csrf_token(&self) -> String {
        self.request.csrf_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_parse() {
        let params = Params::parse("?name=John+Doe&tags=a&tags=b&empty=&flag");

        assert_eq!(params.get("name"), Some("John Doe"));
        assert_eq!(params.get_all("tags"), vec!["a", "b"]);
        assert_eq!(params.get("empty"), Some(""));
        assert_eq!(params.get("flag"), Some(""));
        assert!(!params.has("missing"));
    }

    #[test]
    fn test_params_parse_percent_encoding() {
        let params = Params::parse("q=caf%C3%A9%20%26%20bar");
        assert_eq!(params.get("q"), Some("café & bar"));
    }

    #[test]
    fn test_params_from_json() {
        let json = serde_json::json!({
            "name": "Alice",
            "age": 30,
            "langs": ["de", "en"],
            "nickname": null
        });

        let params = Params::from_json(&json);

        assert_eq!(params.get("name"), Some("Alice"));
        assert_eq!(params.get("age"), Some("30"));
        assert_eq!(params.get_all("langs"), vec!["de", "en"]);
        assert!(!params.has("nickname"));
    }

    #[test]
    fn test_params_from_map_is_sorted() {
        let mut map = HashMap::new();
        map.insert("b".to_string(), "2".to_string());
        map.insert("a".to_string(), "1".to_string());

        let params = Params::from_map(map);
        assert_eq!(params, Params::from_iter([("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_query_before_form() {
        let request = RequestContext::new()
            .with_params(Params::parse("lang=de"))
            .with_params(Params::parse("lang=en"));

        assert_eq!(request.every_param("lang"), vec!["de", "en"]);
        assert_eq!(request.param("lang"), Some("de".to_string()));
    }

    #[test]
    fn test_validation_errors() {
        let mut request = RequestContext::default();
        assert!(!request.has_errors());
        assert!(!request.has_error("email"));

        request.add_error("email", "Invalid email");

        assert!(request.has_errors());
        assert!(request.has_error("email"));
        assert_eq!(request.get_error("email"), Some(&"Invalid email".to_string()));
    }

    #[test]
    fn test_csrf_token() {
        assert_eq!(RequestContext::default().csrf_token(), "");

        let request = RequestContext::new().with_csrf_token("abc123");
        assert_eq!(request.csrf_token(), "abc123");
    }
}
