use crate::retry::{FailureKind, RetryPolicy};
use crate::traits::{Sleeper, TokioSleeper, Transport};
use artisan_core::{FALLBACK_TEXT, PromptPair};
use artisan_providers::gemini::{GeminiConfig, build_generate_content_request};
use artisan_providers::parse::parse_gemini_generate_content;
use artisan_providers::request::HttpRequest;
use std::sync::Arc;

const HTTP_TOO_MANY_REQUESTS: u16 = 429;

/// Text generation client that absorbs every failure.
///
/// `generate` always yields a string: either the model's text or
/// [`FALLBACK_TEXT`] once the retry budget is spent.
pub struct GenerationClient {
    cfg: GeminiConfig,
    transport: Arc<dyn Transport>,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("cfg", &self.cfg)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl GenerationClient {
    pub fn new(cfg: GeminiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            cfg,
            transport,
            policy: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub async fn generate(&self, prompt: &PromptPair) -> String {
        let req = match build_generate_content_request(&self.cfg, prompt) {
            Ok(req) => req,
            Err(e) => {
                log::error!("cannot build generation request: {e:#}");
                return FALLBACK_TEXT.to_string();
            }
        };

        let mut retries: u32 = 0;
        loop {
            let failure = match self.attempt(&req).await {
                Ok(text) => {
                    if retries > 0 {
                        log::info!("generation succeeded after {retries} retries");
                    }
                    return text;
                }
                Err(kind) => kind,
            };

            retries += 1;
            log::warn!(
                "generation attempt {retries}/{} failed: {failure}",
                self.policy.max_attempts()
            );
            if !self.policy.allows_retry(retries) {
                break;
            }

            let delay = self.policy.backoff.delay(failure, retries);
            if !delay.is_zero() {
                log::debug!("backing off {}ms before next attempt", delay.as_millis());
                self.sleeper.sleep(delay).await;
            }
        }

        log::error!("generation gave up after {retries} failed attempts");
        FALLBACK_TEXT.to_string()
    }

    async fn attempt(&self, req: &HttpRequest) -> Result<String, FailureKind> {
        let resp = self.transport.send(req).await.map_err(|e| {
            log::debug!("transport error: {e:#}");
            FailureKind::Transport
        })?;

        if resp.status == HTTP_TOO_MANY_REQUESTS {
            return Err(FailureKind::RateLimited);
        }
        if !resp.is_success() {
            return Err(FailureKind::Status(resp.status));
        }

        parse_gemini_generate_content(&resp.body).map_err(|e| {
            log::debug!("{e:#}");
            FailureKind::Malformed
        })
    }
}
