use artisan_core::RetrySettings;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Why a single attempt did not produce text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("rate limited (HTTP 429)")]
    RateLimited,
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("transport failure")]
    Transport,
    #[error("malformed response payload")]
    Malformed,
}

/// Wait to apply before the next attempt.
///
/// `retries` is the shared failure count after incrementing, so the first
/// failure sees `1`.
pub trait Backoff: Send + Sync + std::fmt::Debug {
    fn delay(&self, kind: FailureKind, retries: u32) -> Duration;
}

/// `2^retries * base` on rate limits; everything else retries immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitBackoff {
    pub base: Duration,
}

impl Default for RateLimitBackoff {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(1000),
        }
    }
}

impl Backoff for RateLimitBackoff {
    fn delay(&self, kind: FailureKind, retries: u32) -> Duration {
        match kind {
            FailureKind::RateLimited => {
                let factor = 1u32.checked_shl(retries).unwrap_or(u32::MAX);
                self.base.saturating_mul(factor)
            }
            _ => Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt; all failure kinds share this budget.
    pub max_retries: u32,
    pub backoff: Arc<dyn Backoff>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Arc::new(RateLimitBackoff::default()),
        }
    }
}

impl RetryPolicy {
    pub fn from_settings(settings: &RetrySettings) -> Self {
        Self {
            max_retries: settings.max_retries,
            backoff: Arc::new(RateLimitBackoff {
                base: Duration::from_millis(settings.rate_limit_base_ms),
            }),
        }
    }

    pub fn allows_retry(&self, retries: u32) -> bool {
        retries <= self.max_retries
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}
