use crate::prompt::PromptTemplate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("generation base URL is empty")]
    EmptyBaseUrl,
    #[error("generation model is empty")]
    EmptyModel,
    #[error("duplicate prompt kind: {0}")]
    DuplicatePrompt(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationDefaults {
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    /// Multiplied by `2^retries` to get the rate-limit wait.
    pub rate_limit_base_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: 3,
            rate_limit_base_ms: 1000,
        }
    }
}

/// On-disk settings. The API key is kept out of this file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub generation: GenerationDefaults,
    #[serde(default)]
    pub retry: RetrySettings,
    pub prompts: Vec<PromptTemplate>,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.generation.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        let mut seen = HashSet::new();
        for p in &self.prompts {
            if !seen.insert(p.kind) {
                return Err(ConfigError::DuplicatePrompt(p.kind.as_str()));
            }
        }
        Ok(())
    }
}
