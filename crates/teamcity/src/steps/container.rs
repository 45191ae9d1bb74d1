use crate::{Error, Properties};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const IMAGE_ID: &str = "plugin.docker.imageId";
const IMAGE_PLATFORM: &str = "plugin.docker.imagePlatform";
const PULL_ENABLED: &str = "plugin.docker.pull.enabled";
const RUN_PARAMETERS: &str = "plugin.docker.run.parameters";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerPlatform {
  #[default]
  #[serde(rename = "*", alias = "any")]
  Any,
  #[serde(rename = "linux")]
  Linux,
  #[serde(rename = "windows")]
  Windows,
}

impl ContainerPlatform {
  pub fn as_str(&self) -> &'static str {
    match self {
      ContainerPlatform::Any => "*",
      ContainerPlatform::Linux => "linux",
      ContainerPlatform::Windows => "windows",
    }
  }
}

impl std::fmt::Display for ContainerPlatform {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ContainerPlatform {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "*" | "any" => Ok(ContainerPlatform::Any),
      "linux" => Ok(ContainerPlatform::Linux),
      "windows" => Ok(ContainerPlatform::Windows),
      _ => Err(Error::invalid_property(IMAGE_PLATFORM, s)),
    }
  }
}

/// Container a command line step runs within.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerDefinition {
  /// Registry, image and optionally tag and digest. Empty means the step does
  /// not run in a container.
  pub image_reference: String,
  pub image_platform: ContainerPlatform,
  /// Pull the image every time the step runs.
  pub explicitly_pull_image: bool,
  /// Extra arguments for the container run (i.e. `docker run`) command.
  pub additional_run_arguments: String,
}

impl ContainerDefinition {
  pub fn new(image_reference: impl Into<String>) -> Self {
    ContainerDefinition {
      image_reference: image_reference.into(),
      ..Default::default()
    }
  }

  pub fn platform(mut self, platform: ContainerPlatform) -> Self {
    self.image_platform = platform;
    self
  }

  pub fn pull(mut self, explicitly_pull_image: bool) -> Self {
    self.explicitly_pull_image = explicitly_pull_image;
    self
  }

  pub fn run_arguments(mut self, arguments: impl Into<String>) -> Self {
    self.additional_run_arguments = arguments.into();
    self
  }

  pub fn is_enabled(&self) -> bool {
    !self.image_reference.is_empty()
  }

  /// Nothing is written without an image reference, whatever the other
  /// fields hold.
  pub(crate) fn write_properties(&self, properties: &mut Properties) {
    if !self.is_enabled() {
      return;
    }

    properties.add_or_replace(IMAGE_ID, self.image_reference.as_str());

    if self.image_platform != ContainerPlatform::Any {
      properties.add_or_replace(IMAGE_PLATFORM, self.image_platform.as_str());
    }

    properties.add_or_replace(PULL_ENABLED, self.explicitly_pull_image.to_string());

    if !self.additional_run_arguments.is_empty() {
      properties.add_or_replace(RUN_PARAMETERS, self.additional_run_arguments.as_str());
    }
  }

  /// Only the image reference is read back. Platform, pull flag and run
  /// arguments stay at their defaults even when the bag carries them.
  pub(crate) fn from_properties(properties: &Properties) -> Self {
    match properties.get_ok(IMAGE_ID) {
      Some(image) => ContainerDefinition::new(image),
      None => ContainerDefinition::default(),
    }
  }
}
