use std::fmt;

/// The single credential slot sent as `x-api-key`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Uses `configured` when non-empty, otherwise the env var `env_name`.
    pub fn resolve(configured: &str, env_name: &str) -> Self {
        if !configured.is_empty() {
            return Self::new(configured);
        }
        let from_env = std::env::var(env_name).unwrap_or_default();
        if from_env.is_empty() {
            log::warn!("⚠️ No API key configured and {} is unset; sending an empty credential", env_name);
        }
        Self(from_env)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "ApiCredential(<empty>)")
        } else {
            write!(f, "ApiCredential(<redacted>)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_shows_the_secret() {
        let credential = ApiCredential::new("sk-ant-very-secret");
        let shown = format!("{:?}", credential);
        assert!(!shown.contains("very-secret"));
        assert_eq!(shown, "ApiCredential(<redacted>)");
    }

    #[test]
    fn configured_value_wins_over_env() {
        let credential = ApiCredential::resolve("from-config", "CHAT_INVOKER_TEST_UNUSED_KEY");
        assert_eq!(credential.expose(), "from-config");
    }

    #[test]
    fn empty_config_and_missing_env_gives_empty_credential() {
        let credential = ApiCredential::resolve("", "CHAT_INVOKER_TEST_SURELY_UNSET_KEY");
        assert!(credential.is_empty());
        assert_eq!(format!("{:?}", credential), "ApiCredential(<empty>)");
    }
}
