use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Property {
  pub name: String,
  #[serde(default)]
  pub value: String,
}

impl Property {
  pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
    Property {
      name: name.into(),
      value: value.into(),
    }
  }
}

/// Ordered key/value bag the server uses to persist step settings.
///
/// Keys are unique. A missing key and a key holding an empty string are
/// different states, which is why lookups go through [`Properties::get_ok`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "PropertiesJson", into = "PropertiesJson")]
pub struct Properties {
  items: Vec<Property>,
}

/// `{"count": 2, "property": [{"name": "...", "value": "..."}]}`
#[derive(Serialize, Deserialize)]
struct PropertiesJson {
  #[serde(default, skip_deserializing)]
  count: usize,
  #[serde(default)]
  property: Vec<Property>,
}

impl Properties {
  pub fn new() -> Self {
    Properties { items: vec![] }
  }

  pub fn get_ok(&self, key: &str) -> Option<&str> {
    self
      .items
      .iter()
      .find(|p| p.name == key)
      .map(|p| p.value.as_str())
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.get_ok(key).is_some()
  }

  pub fn add_or_replace(&mut self, key: impl Into<String>, value: impl Into<String>) {
    let key = key.into();
    let value = value.into();

    match self.items.iter_mut().find(|p| p.name == key) {
      Some(existing) => existing.value = value,
      None => self.items.push(Property::new(key, value)),
    }
  }

  pub fn remove(&mut self, key: &str) -> Option<String> {
    let index = self.items.iter().position(|p| p.name == key)?;

    Some(self.items.remove(index).value)
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .items
      .iter()
      .map(|p| (p.name.as_str(), p.value.as_str()))
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.items.iter().map(|p| p.name.as_str())
  }

  pub fn to_map(&self) -> HashMap<String, String> {
    self
      .items
      .iter()
      .map(|p| (p.name.clone(), p.value.clone()))
      .collect()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut properties = Properties::new();
    for (key, value) in iter {
      properties.add_or_replace(key, value);
    }

    properties
  }
}

impl From<PropertiesJson> for Properties {
  fn from(json: PropertiesJson) -> Self {
    // Duplicate names from the wire collapse, last one wins.
    json
      .property
      .into_iter()
      .map(|p| (p.name, p.value))
      .collect()
  }
}

impl From<Properties> for PropertiesJson {
  fn from(properties: Properties) -> Self {
    PropertiesJson {
      count: properties.items.len(),
      property: properties.items,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_is_empty() {
    let properties = Properties::new();

    assert!(properties.is_empty());
    assert_eq!(properties.len(), 0);
    assert_eq!(properties.get_ok("anything"), None);
  }

  #[test]
  fn test_add_or_replace() {
    let mut properties = Properties::new();
    properties.add_or_replace("a", "1");
    properties.add_or_replace("b", "2");
    properties.add_or_replace("a", "3");

    assert_eq!(properties.len(), 2);
    assert_eq!(properties.get_ok("a"), Some("3"));
    assert_eq!(properties.get_ok("b"), Some("2"));
    // Replacing keeps the original position.
    assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["a", "b"]);
  }

  #[test]
  fn test_empty_value_is_present() {
    let mut properties = Properties::new();
    properties.add_or_replace("empty", "");

    assert_eq!(properties.get_ok("empty"), Some(""));
    assert!(properties.contains_key("empty"));
    assert!(!properties.contains_key("missing"));
  }

  #[test]
  fn test_remove() {
    let mut properties: Properties = vec![("a", "1"), ("b", "2")].into_iter().collect();

    assert_eq!(properties.remove("a"), Some("1".to_string()));
    assert_eq!(properties.remove("a"), None);
    assert_eq!(properties.len(), 1);
  }

  #[test]
  fn test_to_map() {
    let properties: Properties = vec![("a", "1"), ("b", "2")].into_iter().collect();
    let map = properties.to_map();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("b"), Some(&"2".to_string()));
  }

  #[test]
  fn test_serialize() {
    let properties: Properties = vec![("script.content", "echo hi"), ("use.custom.script", "true")]
      .into_iter()
      .collect();

    let json = serde_json::to_value(&properties).unwrap();

    assert_eq!(
      json,
      serde_json::json!({
        "count": 2,
        "property": [
          { "name": "script.content", "value": "echo hi" },
          { "name": "use.custom.script", "value": "true" }
        ]
      })
    );
  }

  #[test]
  fn test_deserialize() {
    let json = r#"{
      "count": 3,
      "property": [
        { "name": "a", "value": "1", "inherited": true },
        { "name": "b", "value": "" },
        { "name": "a", "value": "2" },
        { "name": "c" }
      ]
    }"#;

    let properties: Properties = serde_json::from_str(json).unwrap();

    assert_eq!(properties.len(), 3);
    assert_eq!(properties.get_ok("a"), Some("2"));
    assert_eq!(properties.get_ok("b"), Some(""));
    assert_eq!(properties.get_ok("c"), Some(""));
  }

  #[test]
  fn test_deserialize_without_property_list() {
    let properties: Properties = serde_json::from_str(r#"{"count": 0}"#).unwrap();

    assert!(properties.is_empty());
  }
}
