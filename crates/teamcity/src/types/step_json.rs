use crate::Properties;
use serde::{Deserialize, Serialize};

/// Envelope the server exchanges for every kind of build step.
///
/// `step_type` is kept as a raw string so that envelopes of step kinds this
/// crate does not model still parse, and can be rejected with a precise error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StepJson {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub id: String,
  #[serde(default)]
  pub name: String,
  /// Missing on the wire reads as empty, which then fails the type check.
  #[serde(default, rename = "type")]
  pub step_type: String,
  #[serde(default)]
  pub properties: Properties,
}

impl StepJson {
  pub fn from_json(json: &str) -> crate::Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
    Ok(serde_json::from_slice(bytes)?)
  }

  pub fn to_json(&self) -> crate::Result<String> {
    Ok(serde_json::to_string(self)?)
  }
}
