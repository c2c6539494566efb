use crate::request::{Body, HttpRequest};
use anyhow::Context;
use artisan_core::PromptPair;
use serde_json::json;

#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Builds `POST {base}/models/{model}:generateContent?key={api_key}`.
pub fn build_generate_content_request(
    cfg: &GeminiConfig,
    prompt: &PromptPair,
) -> anyhow::Result<HttpRequest> {
    let joined = join_url(
        &cfg.base_url,
        &format!("models/{}:generateContent", cfg.model),
    );
    let mut url = url::Url::parse(&joined)
        .with_context(|| format!("invalid generation endpoint: {}", cfg.base_url))?;
    url.query_pairs_mut().append_pair("key", &cfg.api_key);

    let payload = json!({
        "contents": [{ "parts": [{ "text": prompt.user_query }] }],
        "systemInstruction": { "parts": [{ "text": prompt.system_instruction }] },
    });

    Ok(HttpRequest {
        method: "POST".into(),
        url: url.into(),
        headers: vec![("Content-Type".into(), "application/json".into())],
        body: Body::Json(payload.to_string()),
    })
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
