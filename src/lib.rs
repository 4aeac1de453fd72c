//! Single-shot chat client for the Anthropic Messages API.
//!
//! [`services::chat_invoker::ChatInvoker`] sends one user prompt through an
//! [`traits::ai_provider::AiProvider`] and returns the first text block of
//! the reply.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
