mod owner_or_manager_config;
pub use owner_or_manager_config::*;
