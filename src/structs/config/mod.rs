pub mod config;
pub mod ai_config;
pub mod prompt_config;
