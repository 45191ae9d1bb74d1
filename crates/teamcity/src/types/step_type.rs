use serde::{Deserialize, Serialize};

/// Discriminator the server writes into the `type` field of a step.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStepType {
  #[serde(rename = "simpleRunner")]
  CommandLine,
}

impl BuildStepType {
  pub fn as_str(&self) -> &'static str {
    match self {
      BuildStepType::CommandLine => "simpleRunner",
    }
  }
}

impl std::fmt::Display for BuildStepType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl PartialEq<str> for BuildStepType {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}
