#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("Invalid type {actual} trying to deserialize into {expected} step")]
  TypeMismatch { expected: String, actual: String },

  #[error("Invalid step: {0}")]
  InvalidStep(String),

  #[error("Invalid value `{value}` for property `{key}`")]
  InvalidProperty { key: String, value: String },

  #[error("Failed to parse step config: {0}")]
  Config(String),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

impl Error {
  pub fn validation<T: ToString>(message: T) -> Self {
    Self::Validation(message.to_string())
  }

  pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
    Self::TypeMismatch {
      expected: expected.into(),
      actual: actual.into(),
    }
  }

  pub fn invalid_step<T: ToString>(message: T) -> Self {
    Self::InvalidStep(message.to_string())
  }

  pub fn invalid_property(key: impl Into<String>, value: impl Into<String>) -> Self {
    Self::InvalidProperty {
      key: key.into(),
      value: value.into(),
    }
  }

  pub fn config<T: ToString>(message: T) -> Self {
    Self::Config(message.to_string())
  }

  pub fn json(source: serde_json::Error) -> Self {
    Self::Json(source)
  }
}

// implement PartialEq for Error so that we can compare errors in tests
impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Validation(a), Self::Validation(b)) => a == b,
      (
        Self::TypeMismatch {
          expected: a_expected,
          actual: a_actual,
        },
        Self::TypeMismatch {
          expected: b_expected,
          actual: b_actual,
        },
      ) => a_expected == b_expected && a_actual == b_actual,
      (Self::InvalidStep(a), Self::InvalidStep(b)) => a == b,
      (
        Self::InvalidProperty {
          key: a_key,
          value: a_value,
        },
        Self::InvalidProperty {
          key: b_key,
          value: b_value,
        },
      ) => a_key == b_key && a_value == b_value,
      (Self::Config(a), Self::Config(b)) => a == b,
      (Self::Json(a), Self::Json(b)) => a.classify() == b.classify() && a.to_string() == b.to_string(),
      _ => false,
    }
  }
}
