mod config;
mod display_config;
mod logging_config;

pub use config::{get_config_manager, Config};
pub use display_config::DisplayConfig;
pub use logging_config::LoggingConfig;
