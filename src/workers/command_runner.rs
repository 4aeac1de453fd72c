use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::chat_error::ChatError;
use crate::enums::commands::{AskArgs, Commands};
use crate::errors::{AppError, AppResult};
use crate::services::ai_providers::anthropic::AnthropicProvider;
use crate::services::chat_invoker::{format_answer, ChatInvoker};
use crate::structs::config::config::Config;
use crate::structs::invoker_settings::InvokerSettings;
use crate::traits::ai_provider::AiProvider;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    /// No subcommand means `ask` with no overrides.
    pub async fn run_command<W: Write>(&mut self, command: Option<Commands>, out: &mut W) -> AppResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command.unwrap_or_else(|| Commands::Ask(AskArgs::default())) {
            Commands::Ask(args) => self.ask_command(&args, out).await,
            Commands::Init => self.init_command(out),
            Commands::Validate => self.validate_command(out),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self, args: &AskArgs) -> AppResult<Config> {
        let mut config = ConfigManager::load(self.config_path.as_deref())?;
        config.apply_overrides(args);
        ConfigManager::validate_config(&config).map_err(|errors| AppError::ValidationError { errors })?;
        Ok(config)
    }

    async fn ask_command<W: Write>(&self, args: &AskArgs, out: &mut W) -> AppResult<()> {
        let config = self.load_config(args)?;
        let provider = AnthropicProvider::from_config(&config.ai).map_err(ChatError::from)?;
        Self::ask_with(provider, InvokerSettings::from(&config), out).await
    }

    /// One round trip through `provider`, answer line written to `out`.
    pub async fn ask_with<P: AiProvider, W: Write>(provider: P, settings: InvokerSettings, out: &mut W) -> AppResult<()> {
        log::info!("🔍 Asking {} ({} max tokens)", settings.model, settings.max_tokens);

        let mut invoker = ChatInvoker::new(provider, settings);
        let reply = invoker.invoke().await?;

        out.write_all(format_answer(&reply).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn init_command<W: Write>(&self, out: &mut W) -> AppResult<()> {
        log::info!("🚀 Initializing chat-invoker configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        writeln!(out, "✅ Created sample config at: {}", path.display())?;
        Ok(())
    }

    fn validate_command<W: Write>(&self, out: &mut W) -> AppResult<()> {
        self.load_config(&AskArgs::default())?;
        writeln!(out, "✅ Configuration is valid")?;
        Ok(())
    }
}
