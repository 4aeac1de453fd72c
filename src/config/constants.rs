pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";
pub const DEFAULT_MAX_TOKENS: u32 = 2024;
pub const DEFAULT_PROMPT: &str = "MCP가 뭐야?";

pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

pub const ANSWER_LABEL: &str = "답변: ";

pub const CONFIG_DIR_NAME: &str = ".chat-invoker";
pub const CONFIG_FILE_NAME: &str = "config.toml";
