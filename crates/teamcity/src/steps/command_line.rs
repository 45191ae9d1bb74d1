use crate::{
  BuildStepType, ContainerDefinition, Error, Properties, Result, Step, StepExecuteMode, StepJson,
};
use serde::{Deserialize, Serialize};

const STEP_MODE: &str = "teamcity.step.mode";
const COMMAND_EXECUTABLE: &str = "command.executable";
const COMMAND_PARAMETERS: &str = "command.parameters";
const SCRIPT_CONTENT: &str = "script.content";
const USE_CUSTOM_SCRIPT: &str = "use.custom.script";

/// What a command line step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLineContent {
  /// Platform specific inline script, like a `.cmd` on Windows or a shell
  /// script on Unix-like agents.
  Script { content: String },
  /// External program plus the parameters passed to it. Empty `args` means
  /// no parameters.
  Executable { path: String, args: String },
}

/// Build step of type "simpleRunner".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "StepJson", into = "StepJson")]
pub struct StepCommandLine {
  pub id: String,
  pub name: String,
  pub content: CommandLineContent,
  pub execute_mode: StepExecuteMode,
  pub container: ContainerDefinition,
}

impl StepCommandLine {
  /// Creates a step that runs an inline script. Fails when `script` is empty.
  pub fn new_script(name: impl Into<String>, script: impl Into<String>) -> Result<Self> {
    let script = script.into();
    if script.is_empty() {
      return Err(Error::validation("script is required"));
    }

    Ok(Self::with_content(
      name.into(),
      CommandLineContent::Script { content: script },
    ))
  }

  /// Creates a step that invokes an external executable. Fails when
  /// `executable` is empty.
  pub fn new_executable(
    name: impl Into<String>,
    executable: impl Into<String>,
    args: impl Into<String>,
  ) -> Result<Self> {
    let executable = executable.into();
    if executable.is_empty() {
      return Err(Error::validation("executable is required"));
    }

    Ok(Self::with_content(
      name.into(),
      CommandLineContent::Executable {
        path: executable,
        args: args.into(),
      },
    ))
  }

  fn with_content(name: String, content: CommandLineContent) -> Self {
    StepCommandLine {
      id: String::new(),
      name,
      content,
      execute_mode: StepExecuteMode::Default,
      container: ContainerDefinition::default(),
    }
  }

  pub fn with_execute_mode(mut self, execute_mode: StepExecuteMode) -> Self {
    self.execute_mode = execute_mode;
    self
  }

  pub fn with_container(mut self, container: ContainerDefinition) -> Self {
    self.container = container;
    self
  }

  pub fn is_executable(&self) -> bool {
    matches!(self.content, CommandLineContent::Executable { .. })
  }

  pub fn custom_script(&self) -> Option<&str> {
    match &self.content {
      CommandLineContent::Script { content } => Some(content.as_str()),
      CommandLineContent::Executable { .. } => None,
    }
  }

  pub fn command_executable(&self) -> Option<&str> {
    match &self.content {
      CommandLineContent::Executable { path, .. } => Some(path.as_str()),
      CommandLineContent::Script { .. } => None,
    }
  }

  pub fn command_parameters(&self) -> Option<&str> {
    match &self.content {
      CommandLineContent::Executable { args, .. } => Some(args.as_str()),
      CommandLineContent::Script { .. } => None,
    }
  }

  pub fn properties(&self) -> Properties {
    let mut properties = Properties::new();
    properties.add_or_replace(STEP_MODE, self.execute_mode.as_str());

    match &self.content {
      CommandLineContent::Executable { path, args } => {
        properties.add_or_replace(COMMAND_EXECUTABLE, path.as_str());

        if !args.is_empty() {
          properties.add_or_replace(COMMAND_PARAMETERS, args.as_str());
        }
      }
      CommandLineContent::Script { content } => {
        properties.add_or_replace(SCRIPT_CONTENT, content.as_str());
        properties.add_or_replace(USE_CUSTOM_SCRIPT, "true");
      }
    }

    self.container.write_properties(&mut properties);

    properties
  }

  pub fn to_step_json(&self) -> StepJson {
    StepJson {
      id: self.id.clone(),
      name: self.name.clone(),
      step_type: BuildStepType::CommandLine.as_str().to_string(),
      properties: self.properties(),
    }
  }

  pub fn to_json(&self) -> Result<String> {
    let json = serde_json::to_string(&self.to_step_json())?;
    log::trace!("Encoded command line step `{}`: {}", self.name, json);

    Ok(json)
  }

  pub fn to_json_pretty(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(&self.to_step_json())?)
  }

  pub fn from_json(json: &str) -> Result<Self> {
    Self::try_from(StepJson::from_json(json)?)
  }

  pub fn from_slice(bytes: &[u8]) -> Result<Self> {
    Self::try_from(StepJson::from_slice(bytes)?)
  }

  fn decode_content(name: &str, properties: &Properties) -> Result<CommandLineContent> {
    match (
      properties.get_ok(USE_CUSTOM_SCRIPT),
      properties.get_ok(COMMAND_EXECUTABLE),
    ) {
      (Some(_), None) => Ok(CommandLineContent::Script {
        content: properties
          .get_ok(SCRIPT_CONTENT)
          .unwrap_or_default()
          .to_string(),
      }),
      (None, Some(path)) => Ok(CommandLineContent::Executable {
        path: path.to_string(),
        args: properties
          .get_ok(COMMAND_PARAMETERS)
          .unwrap_or_default()
          .to_string(),
      }),
      (Some(_), Some(_)) => Err(Error::invalid_step(format!(
        "step `{}` sets both `{}` and `{}`",
        name, USE_CUSTOM_SCRIPT, COMMAND_EXECUTABLE
      ))),
      (None, None) => Err(Error::invalid_step(format!(
        "step `{}` sets neither `{}` nor `{}`",
        name, USE_CUSTOM_SCRIPT, COMMAND_EXECUTABLE
      ))),
    }
  }
}

impl TryFrom<StepJson> for StepCommandLine {
  type Error = Error;

  fn try_from(json: StepJson) -> Result<Self> {
    let expected = BuildStepType::CommandLine;
    if expected != *json.step_type.as_str() {
      log::debug!(
        "Rejecting step `{}` of type `{}` as a command line step",
        json.name,
        json.step_type
      );
      return Err(Error::type_mismatch(expected.as_str(), json.step_type));
    }

    let content = Self::decode_content(&json.name, &json.properties)?;

    let execute_mode = match json.properties.get_ok(STEP_MODE) {
      Some(mode) => StepExecuteMode::from(mode),
      None => StepExecuteMode::Default,
    };

    let container = ContainerDefinition::from_properties(&json.properties);

    log::trace!(
      "Decoded command line step `{}` (id `{}`, {} properties)",
      json.name,
      json.id,
      json.properties.len()
    );

    Ok(StepCommandLine {
      id: json.id,
      name: json.name,
      content,
      execute_mode,
      container,
    })
  }
}

impl From<StepCommandLine> for StepJson {
  fn from(step: StepCommandLine) -> Self {
    step.to_step_json()
  }
}

impl Step for StepCommandLine {
  fn id(&self) -> &str {
    &self.id
  }

  fn name(&self) -> &str {
    &self.name
  }

  fn step_type(&self) -> BuildStepType {
    BuildStepType::CommandLine
  }

  fn container(&self) -> &ContainerDefinition {
    &self.container
  }
}
