use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// When a build step runs relative to the outcome of the steps before it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum StepExecuteMode {
  /// Run only if the build status is successful so far.
  #[default]
  Default,
  /// Run even if a previous step failed, unless the build was stopped.
  ExecuteIfSuccess,
  /// Run only if the build status is failed.
  ExecuteIfFailed,
  /// Run regardless of build status, even if the build was stopped.
  ExecuteAlways,
  /// A mode this crate does not know about, kept verbatim so it round-trips.
  Other(String),
}

impl StepExecuteMode {
  pub fn as_str(&self) -> &str {
    match self {
      StepExecuteMode::Default => "default",
      StepExecuteMode::ExecuteIfSuccess => "execute_if_success",
      StepExecuteMode::ExecuteIfFailed => "execute_if_failed",
      StepExecuteMode::ExecuteAlways => "execute_always",
      StepExecuteMode::Other(mode) => mode,
    }
  }

  pub fn is_known(&self) -> bool {
    !matches!(self, StepExecuteMode::Other(_))
  }
}

impl std::fmt::Display for StepExecuteMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl From<&str> for StepExecuteMode {
  fn from(s: &str) -> Self {
    match s {
      "default" => StepExecuteMode::Default,
      "execute_if_success" => StepExecuteMode::ExecuteIfSuccess,
      "execute_if_failed" => StepExecuteMode::ExecuteIfFailed,
      "execute_always" => StepExecuteMode::ExecuteAlways,
      other => StepExecuteMode::Other(other.to_string()),
    }
  }
}

impl From<String> for StepExecuteMode {
  fn from(s: String) -> Self {
    StepExecuteMode::from(s.as_str())
  }
}

impl From<StepExecuteMode> for String {
  fn from(mode: StepExecuteMode) -> Self {
    mode.as_str().to_string()
  }
}

impl FromStr for StepExecuteMode {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(StepExecuteMode::from(s))
  }
}
