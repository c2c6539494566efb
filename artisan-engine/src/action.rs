use crate::client::GenerationClient;
use crate::traits::{BusyToggle, TextSink};
use artisan_core::{BUSY_LABEL, PromptPair};

/// Runs one generation on behalf of a UI control.
///
/// The control is disabled and labelled [`BUSY_LABEL`] for the whole request,
/// then re-enabled with its original label. The client never fails, so the
/// restore always happens; a sink write error is logged and does not skip it.
pub async fn run_generation(
    control: &dyn BusyToggle,
    output: &dyn TextSink,
    client: &GenerationClient,
    prompt: &PromptPair,
) {
    let original_label = control.label();
    control.set_enabled(false);
    control.set_label(BUSY_LABEL);

    let text = client.generate(prompt).await;
    if let Err(e) = output.replace_text(&text).await {
        log::error!("writing generated text failed: {e:#}");
    }

    control.set_enabled(true);
    control.set_label(&original_label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Sleeper, Transport};
    use artisan_core::FALLBACK_TEXT;
    use artisan_providers::gemini::GeminiConfig;
    use artisan_providers::request::HttpRequest;
    use artisan_providers::runtime::HttpResponse;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Enabled(bool),
        Label(String),
        Request { control_enabled: bool },
        Write(String),
    }

    type Log = Arc<Mutex<Vec<Event>>>;

    struct FakeButton {
        log: Log,
        enabled: Arc<Mutex<bool>>,
        label: Mutex<String>,
    }

    impl BusyToggle for FakeButton {
        fn label(&self) -> String {
            self.label.lock().unwrap().clone()
        }

        fn set_label(&self, label: &str) {
            *self.label.lock().unwrap() = label.to_string();
            self.log.lock().unwrap().push(Event::Label(label.to_string()));
        }

        fn set_enabled(&self, enabled: bool) {
            *self.enabled.lock().unwrap() = enabled;
            self.log.lock().unwrap().push(Event::Enabled(enabled));
        }
    }

    struct FakeOutput {
        log: Log,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl TextSink for FakeOutput {
        async fn replace_text(&self, text: &str) -> anyhow::Result<()> {
            self.log.lock().unwrap().push(Event::Write(text.to_string()));
            if self.fail {
                anyhow::bail!("output element detached");
            }
            Ok(())
        }
    }

    struct ObservingTransport {
        log: Log,
        enabled: Arc<Mutex<bool>>,
        status: u16,
    }

    #[async_trait::async_trait]
    impl Transport for ObservingTransport {
        async fn send(&self, _req: &HttpRequest) -> anyhow::Result<HttpResponse> {
            let control_enabled = *self.enabled.lock().unwrap();
            self.log
                .lock()
                .unwrap()
                .push(Event::Request { control_enabled });
            Ok(HttpResponse {
                status: self.status,
                body: br#"{"candidates":[{"content":{"parts":[{"text":"A warm story."}]}}]}"#
                    .to_vec(),
            })
        }
    }

    struct NoSleep;

    #[async_trait::async_trait]
    impl Sleeper for NoSleep {
        async fn sleep(&self, _duration: Duration) {}
    }

    struct Harness {
        log: Log,
        button: FakeButton,
        client: GenerationClient,
    }

    fn harness(label: &str, status: u16) -> Harness {
        let log: Log = Arc::new(Mutex::new(vec![]));
        let enabled = Arc::new(Mutex::new(true));
        let button = FakeButton {
            log: log.clone(),
            enabled: enabled.clone(),
            label: Mutex::new(label.to_string()),
        };
        let transport = Arc::new(ObservingTransport {
            log: log.clone(),
            enabled,
            status,
        });
        let client = GenerationClient::new(
            GeminiConfig {
                base_url: "https://gen.example.com/v1beta".into(),
                model: "gemini-test".into(),
                api_key: "k".into(),
            },
            transport,
        )
        .with_sleeper(Arc::new(NoSleep));
        Harness {
            log,
            button,
            client,
        }
    }

    fn prompt() -> PromptPair {
        PromptPair::new("storyteller", "bio please")
    }

    #[tokio::test]
    async fn disables_during_request_and_restores_after_write() {
        let h = harness("✨ Generate Bio", 200);
        let out = FakeOutput {
            log: h.log.clone(),
            fail: false,
        };

        run_generation(&h.button, &out, &h.client, &prompt()).await;

        let log = h.log.lock().unwrap().clone();
        assert_eq!(
            log,
            vec![
                Event::Enabled(false),
                Event::Label(BUSY_LABEL.into()),
                Event::Request {
                    control_enabled: false
                },
                Event::Write("A warm story.".into()),
                Event::Enabled(true),
                Event::Label("✨ Generate Bio".into()),
            ]
        );
        assert_eq!(h.button.label(), "✨ Generate Bio");
    }

    #[tokio::test]
    async fn restores_control_on_fallback_path() {
        let h = harness("Describe", 500);
        let out = FakeOutput {
            log: h.log.clone(),
            fail: false,
        };

        run_generation(&h.button, &out, &h.client, &prompt()).await;

        let log = h.log.lock().unwrap().clone();
        let requests = log
            .iter()
            .filter(|e| matches!(e, Event::Request { .. }))
            .count();
        assert_eq!(requests, 4);
        assert!(log.contains(&Event::Write(FALLBACK_TEXT.into())));

        let reenabled = log.iter().filter(|e| **e == Event::Enabled(true)).count();
        assert_eq!(reenabled, 1);
        assert_eq!(log.last(), Some(&Event::Label("Describe".into())));
    }

    #[tokio::test]
    async fn restores_control_when_output_write_fails() {
        let h = harness("  padded label  ", 200);
        let out = FakeOutput {
            log: h.log.clone(),
            fail: true,
        };

        run_generation(&h.button, &out, &h.client, &prompt()).await;

        let log = h.log.lock().unwrap().clone();
        assert_eq!(
            &log[log.len() - 2..],
            &[
                Event::Enabled(true),
                Event::Label("  padded label  ".into())
            ]
        );
        assert_eq!(h.button.label(), "  padded label  ");
    }

    #[tokio::test]
    async fn writes_text_verbatim() {
        let log: Log = Arc::new(Mutex::new(vec![]));
        let transport = Arc::new(MarkupTransport);
        let client = GenerationClient::new(
            GeminiConfig {
                base_url: "https://gen.example.com/v1beta".into(),
                model: "m".into(),
                api_key: "k".into(),
            },
            transport,
        );
        let button = FakeButton {
            log: log.clone(),
            enabled: Arc::new(Mutex::new(true)),
            label: Mutex::new("Go".into()),
        };
        let out = FakeOutput {
            log: log.clone(),
            fail: false,
        };

        run_generation(&button, &out, &client, &prompt()).await;

        assert!(
            log.lock()
                .unwrap()
                .contains(&Event::Write("<b>bold</b> & more".into()))
        );
    }

    struct MarkupTransport;

    #[async_trait::async_trait]
    impl Transport for MarkupTransport {
        async fn send(&self, _req: &HttpRequest) -> anyhow::Result<HttpResponse> {
            Ok(HttpResponse {
                status: 200,
                body: br#"{"candidates":[{"content":{"parts":[{"text":"<b>bold</b> & more"}]}}]}"#
                    .to_vec(),
            })
        }
    }
}
