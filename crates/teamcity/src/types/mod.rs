mod error;
mod execute_mode;
mod properties;
mod step_json;
mod step_type;

pub use error::*;
pub use execute_mode::*;
pub use properties::*;
pub use step_json::*;
pub use step_type::*;
