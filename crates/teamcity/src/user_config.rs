use crate::{
  ContainerDefinition, ContainerPlatform, Error, Result, StepCommandLine, StepExecuteMode,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct UserContainer {
  pub image: String,
  pub platform: Option<ContainerPlatform>,
  pub pull: Option<bool>,
  #[serde(rename = "run-args")]
  pub run_args: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct UserCommandLineStep {
  pub name: String,
  pub script: Option<String>,
  pub executable: Option<String>,
  pub args: Option<String>,
  #[serde(rename = "execute-mode")]
  pub execute_mode: Option<StepExecuteMode>,
  pub container: Option<UserContainer>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct UserStepsConfig {
  pub steps: Vec<UserCommandLineStep>,
}

impl UserContainer {
  pub fn normalize(&self) -> ContainerDefinition {
    ContainerDefinition {
      image_reference: self.image.clone(),
      image_platform: self.platform.unwrap_or_default(),
      explicitly_pull_image: self.pull.unwrap_or(false),
      additional_run_arguments: self.run_args.clone().unwrap_or_default(),
    }
  }
}

impl UserCommandLineStep {
  pub fn into_step(self) -> Result<StepCommandLine> {
    let step = match (self.script, self.executable) {
      (Some(script), None) => StepCommandLine::new_script(self.name, script)?,
      (None, Some(executable)) => {
        StepCommandLine::new_executable(self.name, executable, self.args.unwrap_or_default())?
      }
      _ => {
        return Err(Error::config(format!(
          "Step `{}` must set exactly one of `script` or `executable`",
          self.name
        )))
      }
    };

    let container = self
      .container
      .map(|container| container.normalize())
      .unwrap_or_default();

    Ok(
      step
        .with_execute_mode(self.execute_mode.unwrap_or_default())
        .with_container(container),
    )
  }
}

impl UserStepsConfig {
  fn validate(config: &UserStepsConfig) -> Result<()> {
    if config.steps.is_empty() {
      return Err(Error::config("Config must have at least one step"));
    }

    for (index, step) in config.steps.iter().enumerate() {
      match (&step.script, &step.executable) {
        (Some(_), Some(_)) => {
          return Err(Error::config(format!(
            "Step #{} `{}` cannot set both `script` and `executable`",
            index, step.name
          )));
        }
        (None, None) => {
          return Err(Error::config(format!(
            "Step #{} `{}` must set `script` or `executable`",
            index, step.name
          )));
        }
        (Some(_), None) if step.args.is_some() => {
          return Err(Error::config(format!(
            "Step #{} `{}` sets `args` without `executable`",
            index, step.name
          )));
        }
        _ => {}
      }

      if let Some(mode) = step.execute_mode.as_ref().filter(|mode| !mode.is_known()) {
        return Err(Error::config(format!(
          "Step #{} `{}` has unknown execute-mode `{}`",
          index, step.name, mode
        )));
      }

      if let Some(container) = &step.container {
        if container.image.is_empty() {
          return Err(Error::config(format!(
            "Step #{} `{}` declares a container without an image",
            index, step.name
          )));
        }
      }
    }

    Ok(())
  }

  /// Builds typed steps, in declaration order.
  pub fn into_steps(self) -> Result<Vec<StepCommandLine>> {
    self
      .steps
      .into_iter()
      .map(UserCommandLineStep::into_step)
      .collect()
  }
}

impl TryFrom<&str> for UserStepsConfig {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self> {
    let config = serde_yaml::from_str(value)
      .map_err(|e| Error::config(format!("Failed to parse steps: {}", e)))?;

    Self::validate(&config)?;

    Ok(config)
  }
}

impl TryFrom<String> for UserStepsConfig {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> {
    Self::try_from(value.as_str())
  }
}
