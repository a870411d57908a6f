pub mod config;
pub mod error;

pub use config::{Category, Config, ParentDoc, Version};
pub use error::ConfigError;
