mod command_line;
mod container;

pub use command_line::*;
pub use container::*;

use crate::BuildStepType;

/// Common view over build steps, whatever their kind.
pub trait Step {
  /// Server-assigned id, empty until the step is persisted.
  fn id(&self) -> &str;

  fn name(&self) -> &str;

  fn step_type(&self) -> BuildStepType;

  fn container(&self) -> &ContainerDefinition;
}
