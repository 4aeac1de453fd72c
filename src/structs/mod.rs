pub mod ai;
pub mod api_credential;
pub mod cli;
pub mod config;
pub mod invoker_settings;
