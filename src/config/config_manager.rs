use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{AppError, AppResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default location when `None`.
    ///
    /// A missing default file yields built-in defaults; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Config> {
        let explicit = path.is_some();
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);

        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(&path).map_err(|e| AppError::config_file_error(&path, e))?;
            return toml::from_str(&content).map_err(|e: toml::de::Error| AppError::config_file_error(&path, e));
        }

        if explicit {
            return Err(AppError::config_file_error(&path, "file not found"));
        }

        log::debug!("No config at {}, using built-in defaults", path.display());
        Ok(Config::default())
    }

    pub fn sample_config() -> String {
        let defaults = Config::default();
        format!(
            r#"# chat-invoker configuration

[ai]
model = "{model}"
max_tokens = {max_tokens}

# Leave empty to read the key from the environment variable below
api_key = ""
api_key_env = "{api_key_env}"

base_url = "{base_url}"
api_version = "{api_version}"

# Optional HTTP timeout; no timeout when omitted
# timeout_secs = 60

[prompt]
text = "{prompt}"
"#,
            model = defaults.ai.model,
            max_tokens = defaults.ai.max_tokens,
            api_key_env = defaults.ai.api_key_env,
            base_url = defaults.ai.base_url,
            api_version = defaults.ai.api_version,
            prompt = defaults.prompt.text,
        )
    }

    /// Writes the sample config. Refuses to overwrite an existing file.
    pub fn create_sample_config(path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);

        if path.exists() {
            bail!("config file already exists at {}", path.display());
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create config directory {}", dir.display()))?;
        }
        fs::write(&path, Self::sample_config())
            .with_context(|| format!("failed to write config file {}", path.display()))?;

        log::info!("✅ Created sample config at: {}", path.display());
        Ok(path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }
        if config.ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be a positive integer".to_string());
        }
        if config.prompt.text.is_empty() {
            errors.push("prompt.text must not be empty".to_string());
        }
        if !(config.ai.base_url.starts_with("http://") || config.ai.base_url.starts_with("https://")) {
            errors.push(format!("ai.base_url must be an http(s) URL: {}", config.ai.base_url));
        }
        if config.ai.api_key.is_empty() && config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name a variable when ai.api_key is empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_PROMPT};

    #[test]
    fn sample_config_parses_back_to_defaults() {
        let parsed: Config = toml::from_str(&ConfigManager::sample_config()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[ai]\nmax_tokens = 10\n").unwrap();
        assert_eq!(parsed.ai.max_tokens, 10);
        assert_eq!(parsed.ai.model, DEFAULT_MODEL);
        assert_eq!(parsed.prompt.text, DEFAULT_PROMPT);
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.ai.max_tokens, DEFAULT_MAX_TOKENS);
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn validation_collects_all_errors() {
        let mut config = Config::default();
        config.ai.model = " ".to_string();
        config.ai.max_tokens = 0;
        config.prompt.text = String::new();
        config.ai.base_url = "ftp://example.com".to_string();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
