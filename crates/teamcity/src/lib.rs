mod steps;
mod types;
mod user_config;

pub use steps::*;
pub use types::*;
pub use user_config::*;

pub type Result<T> = std::result::Result<T, Error>;
