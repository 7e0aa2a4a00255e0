//! The in-memory catalogue of categories and their item codes.

use std::collections::BTreeMap;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// Top-level key holding the `key -> name` category mapping. Item lists share
/// the same namespace, so no category may use it as a name.
pub const CATEGORIES_KEY: &str = "categories";

/// Categories keyed by their short identifier, plus one list of item codes per
/// category name.
///
/// Serialized as a single mapping: `categories` first, then every item list in
/// sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: BTreeMap<String, String>,
    #[serde(flatten, deserialize_with = "lenient_lists")]
    pub items: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_name(&self, key: &str) -> Option<&str> {
        self.categories.get(key).map(String::as_str)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    /// Returns the key mapped to `name`, if any category uses it.
    pub fn key_for_name(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, candidate)| candidate.as_str() == name)
            .map(|(key, _)| key.as_str())
    }

    /// Iterates `(key, name)` pairs in key order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.items.is_empty()
    }

    /// Items listed under the category identified by `key`. A category whose
    /// list is absent yields an empty slice.
    pub fn items_for(&self, key: &str) -> Option<&[String]> {
        let name = self.category_name(key)?;
        Some(self.items.get(name).map(Vec::as_slice).unwrap_or(&[]))
    }

    pub fn items_for_mut(&mut self, key: &str) -> Option<&mut Vec<String>> {
        let name = self.categories.get(key)?;
        Some(self.items.entry(name.clone()).or_default())
    }

    /// Item lists that no category maps to.
    pub fn orphan_lists(&self) -> Vec<&str> {
        self.items
            .keys()
            .filter(|name| self.key_for_name(name).is_none())
            .map(String::as_str)
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Item lists as people hand-edit them: an empty `name:` entry is an empty
/// list, blank entries are dropped and bare scalars such as `- 42` are kept
/// as their text.
fn lenient_lists<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(name, value)| {
            let codes: Vec<String> = match value {
                Value::Null => Vec::new(),
                Value::Sequence(entries) => entries
                    .into_iter()
                    .filter(|entry| !entry.is_null())
                    .map(|entry| {
                        scalar_text(entry).ok_or_else(|| {
                            D::Error::custom(format!("list `{name}` holds a non-scalar entry"))
                        })
                    })
                    .collect::<Result<_, _>>()?,
                _ => return Err(D::Error::custom(format!("`{name}` is not a list"))),
            };
            Ok((name, codes))
        })
        .collect()
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
