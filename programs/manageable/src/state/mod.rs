mod manageable_config;
pub use manageable_config::*;
