mod common;
mod config_manager;
