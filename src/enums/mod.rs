pub mod role;
pub mod content_block;
pub mod commands;
pub mod invoker_state;
pub mod ai_provider_error;
pub mod chat_error;
