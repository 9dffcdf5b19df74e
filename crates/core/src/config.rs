//! Process configuration, read once at startup and passed down explicitly.

use crate::{
    DEFAULT_BASE_URL, DEFAULT_LLM_TIMEOUT_SECS, DEFAULT_MODEL, ENV_API_KEY, ENV_BASE_URL,
    ENV_LLM_TIMEOUT_SECS, ENV_MODEL, env_parse_with_default, env_string_or,
};

/// Settings for the completion service.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct CoachConfig {
    /// Bearer token. May be empty: the upstream rejects the first call then.
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub llm_timeout_secs: u64,
}

impl std::fmt::Debug for CoachConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .finish()
    }
}

impl CoachConfig {
    #[must_use]
    pub fn new(api_key: String, base_url: String, model: String, llm_timeout_secs: u64) -> Self {
        Self { api_key, base_url, model, llm_timeout_secs }
    }

    /// Builds the configuration from the process environment.
    ///
    /// A missing API key is logged, not rejected.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        if api_key.trim().is_empty() {
            tracing::warn!("{ENV_API_KEY} is not set; analysis requests will fail upstream");
        }
        Self {
            api_key: api_key.trim().to_owned(),
            base_url: env_string_or(ENV_BASE_URL, DEFAULT_BASE_URL),
            model: env_string_or(ENV_MODEL, DEFAULT_MODEL),
            llm_timeout_secs: env_parse_with_default(
                ENV_LLM_TIMEOUT_SECS,
                DEFAULT_LLM_TIMEOUT_SECS,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = CoachConfig::new(
            "sk-secret".to_owned(),
            DEFAULT_BASE_URL.to_owned(),
            DEFAULT_MODEL.to_owned(),
            DEFAULT_LLM_TIMEOUT_SECS,
        );
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("gpt-4.1-mini"));
    }
}
