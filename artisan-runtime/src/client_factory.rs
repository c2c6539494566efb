use std::sync::Arc;

use anyhow::Context;
use artisan_core::config::AppConfig;
use artisan_engine::client::GenerationClient;
use artisan_engine::retry::RetryPolicy;
use artisan_providers::gemini::GeminiConfig;
use artisan_providers::runtime::HttpRuntime;

use crate::secrets::{SecretKey, resolve_secret};

/// Builds a generation client from config and an explicit API key.
pub fn build_client(cfg: &AppConfig, api_key: String) -> anyhow::Result<GenerationClient> {
    let gemini = GeminiConfig {
        base_url: cfg.generation.base_url.clone(),
        model: cfg.generation.model.clone(),
        api_key,
    };
    let runtime = HttpRuntime::new()?;
    Ok(GenerationClient::new(gemini, Arc::new(runtime))
        .with_policy(RetryPolicy::from_settings(&cfg.retry)))
}

/// Same as `build_client`, resolving the key from the environment or keyring.
pub fn build_client_from_config(cfg: &AppConfig) -> anyhow::Result<GenerationClient> {
    let key = resolve_secret(SecretKey::GeminiApiKey)?.with_context(|| {
        format!(
            "no Gemini API key; set {} or run `artisan set-key`",
            SecretKey::GeminiApiKey.env_var()
        )
    })?;
    build_client(cfg, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_app_config;

    #[test]
    fn client_debug_never_shows_key() {
        let client = build_client(&default_app_config(), "AIza-very-secret".into()).unwrap();
        let s = format!("{client:?}");
        assert!(!s.contains("AIza-very-secret"));
        assert!(s.contains("max_retries: 3"));
    }
}
