use artisan_engine::traits::{BusyToggle, TextSink};
use std::io::Write;
use std::sync::Mutex;

/// A button rendered as status lines on stderr.
#[derive(Debug)]
pub struct TerminalButton {
    name: String,
    label: Mutex<String>,
}

impl TerminalButton {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: Mutex::new(label.into()),
        }
    }
}

impl BusyToggle for TerminalButton {
    fn label(&self) -> String {
        self.label.lock().map(|l| l.clone()).unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        if let Ok(mut l) = self.label.lock() {
            *l = label.to_string();
        }
        eprintln!("[{}] {}", self.name, label);
    }

    fn set_enabled(&self, enabled: bool) {
        log::debug!(
            "control {} {}",
            self.name,
            if enabled { "enabled" } else { "disabled" }
        );
    }
}

/// Writes generated text to stdout under a target heading.
#[derive(Debug)]
pub struct StdoutSink {
    target: String,
}

impl StdoutSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

#[async_trait::async_trait]
impl TextSink for StdoutSink {
    async fn replace_text(&self, text: &str) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "--- {} ---", self.target)?;
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }
}

/// In-memory control for embedding and tests.
#[derive(Debug)]
pub struct MemoryButton {
    pub enabled: Mutex<bool>,
    pub label: Mutex<String>,
}

impl MemoryButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            enabled: Mutex::new(true),
            label: Mutex::new(label.into()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.lock().map(|e| *e).unwrap_or(false)
    }
}

impl BusyToggle for MemoryButton {
    fn label(&self) -> String {
        self.label.lock().map(|l| l.clone()).unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        if let Ok(mut l) = self.label.lock() {
            *l = label.to_string();
        }
    }

    fn set_enabled(&self, enabled: bool) {
        if let Ok(mut e) = self.enabled.lock() {
            *e = enabled;
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySink {
    pub text: Mutex<String>,
}

impl MemorySink {
    pub fn text(&self) -> String {
        self.text.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl TextSink for MemorySink {
    async fn replace_text(&self, text: &str) -> anyhow::Result<()> {
        let mut t = self
            .text
            .lock()
            .map_err(|_| anyhow::anyhow!("sink lock poisoned"))?;
        *t = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_button_tracks_state() {
        let b = MemoryButton::new("Go");
        b.set_enabled(false);
        b.set_label("Generating...");
        assert!(!b.is_enabled());
        assert_eq!(b.label(), "Generating...");
    }

    #[tokio::test]
    async fn memory_sink_replaces_rather_than_appends() {
        let s = MemorySink::default();
        s.replace_text("first").await.unwrap();
        s.replace_text("second").await.unwrap();
        assert_eq!(s.text(), "second");
    }

    #[test]
    fn terminal_button_keeps_label() {
        let b = TerminalButton::new("bio", "Generate Bio");
        assert_eq!(b.label(), "Generate Bio");
        b.set_label("Generating...");
        assert_eq!(b.label(), "Generating...");
    }
}
