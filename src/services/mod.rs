pub mod ai_providers;
pub mod chat_invoker;
