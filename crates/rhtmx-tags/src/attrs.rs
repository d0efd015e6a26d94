// File: src/attrs.rs
// Purpose: Attribute maps for generated tags

use std::collections::BTreeMap;
use std::fmt::Display;

/// Attributes of a single tag
///
/// Keys are kept in a `BTreeMap`, so rendering always walks them in
/// lexicographic order. A value of `None` is an attribute whose value is
/// absent; it still renders, as `key=""`.
///
/// Entries added with [`Attrs::with_data`] are kept apart and flattened into
/// `data-*` attributes when the tag is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    values: BTreeMap<String, Option<String>>,
    data: BTreeMap<String, String>,
}

impl Attrs {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attrs::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.set(name, value);
        self
    }

    /// Builder form of [`Attrs::set_empty`]
    pub fn with_empty(mut self, name: impl Into<String>) -> Self {
        self.set_empty(name);
        self
    }

    /// Builder form of [`Attrs::set_data`]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.set_data(key, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), Some(value.to_string()));
    }

    /// Set an attribute without a value (rendered as `name=""`)
    pub fn set_empty(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), None);
    }

    /// Add an entry to the nested `data` mapping
    ///
    /// `set_data("my_id", 1)` renders as `data-my-id="1"`.
    pub fn set_data(&mut self, key: impl Into<String>, value: impl Display) {
        self.data.insert(key.into(), value.to_string());
    }

    /// Get an attribute value
    ///
    /// Returns `Some("")` for an attribute set without a value and `None`
    /// when the attribute is missing.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(|value| value.as_deref().unwrap_or(""))
    }

    /// Check if an attribute is present (with or without a value)
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name).flatten()
    }

    /// Get the nested `data` mapping as given (keys not yet normalized)
    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.data.is_empty()
    }

    /// Overlay `other` on top of `self`; entries in `other` win
    pub fn merge(mut self, other: Attrs) -> Self {
        self.values.extend(other.values);
        self.data.extend(other.data);
        self
    }

    /// Final attribute list in render order
    ///
    /// `data` entries are flattened into `data-<key>` (lower-cased, `_`
    /// replaced by `-`) and take precedence over a plain attribute with the
    /// same name.
    pub fn flatten(&self) -> BTreeMap<String, &str> {
        let mut flat: BTreeMap<String, &str> = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.as_deref().unwrap_or("")))
            .collect();

        for (key, value) in &self.data {
            flat.insert(data_attribute_name(key), value.as_str());
        }

        flat
    }
}

/// `my_ID` -> `data-my-id`
pub fn data_attribute_name(key: &str) -> String {
    format!("data-{}", key.replace('_', "-").to_lowercase())
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attrs
where
    K: Into<String>,
    V: Display,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Build an [`Attrs`] from `name => value` pairs
///
/// ```
/// use rhtmx_tags::attrs;
///
/// let attrs = attrs! { "id" => "foo", "tabindex" => 2 };
/// assert_eq!(attrs.get("tabindex"), Some("2"));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attrs::new();
        $(attrs.set($name, $value);)+
        attrs
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_is_sorted() {
        let attrs = Attrs::new()
            .with("type", "text")
            .with("name", "user")
            .with("class", "wide");

        let keys: Vec<String> = attrs.flatten().into_keys().collect();
        assert_eq!(keys, vec!["class", "name", "type"]);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let attrs = Attrs::new().with_empty("disabled");
        assert!(attrs.contains("disabled"));
        assert_eq!(attrs.get("disabled"), Some(""));
        assert_eq!(attrs.flatten().get("disabled"), Some(&""));
    }

    #[test]
    fn test_data_keys_are_normalized() {
        let attrs = Attrs::new().with_data("my_id", 1).with_data("Name", "test");
        let flat = attrs.flatten();

        assert_eq!(flat.get("data-my-id"), Some(&"1"));
        assert_eq!(flat.get("data-name"), Some(&"test"));
        assert!(!flat.contains_key("data"));
    }

    #[test]
    fn test_data_overrides_plain_attribute() {
        let attrs = Attrs::new()
            .with("data-role", "plain")
            .with_data("role", "nested");
        assert_eq!(attrs.flatten().get("data-role"), Some(&"nested"));
    }

    #[test]
    fn test_merge_later_wins() {
        let base = Attrs::new().with("name", "email").with("type", "text");
        let merged = base.merge(Attrs::new().with("type", "email"));

        assert_eq!(merged.get("name"), Some("email"));
        assert_eq!(merged.get("type"), Some("email"));
    }

    #[test]
    fn test_attrs_macro() {
        let attrs = attrs! { "id" => "foo", "rows" => 3 };
        assert_eq!(attrs.get("id"), Some("foo"));
        assert_eq!(attrs.get("rows"), Some("3"));
        assert!(attrs! {}.is_empty());
    }
}
