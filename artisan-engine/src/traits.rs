use artisan_providers::request::HttpRequest;
use artisan_providers::runtime::{HttpResponse, HttpRuntime};
use async_trait::async_trait;
use std::time::Duration;

/// Sends one request and returns whatever status came back.
///
/// Only transport-level problems are errors; non-2xx statuses are not.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, req: &HttpRequest) -> anyhow::Result<HttpResponse>;
}

#[async_trait]
impl Transport for HttpRuntime {
    async fn send(&self, req: &HttpRequest) -> anyhow::Result<HttpResponse> {
        self.execute(req).await
    }
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// A control that shows a label and can be disabled while work is in flight.
pub trait BusyToggle: Send + Sync {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_enabled(&self, enabled: bool);
}

/// An output location whose displayed text is replaced wholesale.
///
/// Text is written as-is; implementations must not interpret markup.
#[async_trait]
pub trait TextSink: Send + Sync {
    async fn replace_text(&self, text: &str) -> anyhow::Result<()>;
}
