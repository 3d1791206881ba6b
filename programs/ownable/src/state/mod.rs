mod ownable_config;
pub use ownable_config::*;
