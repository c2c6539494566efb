use anyhow::Context;
use artisan_core::config::AppConfig;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::defaults::default_app_config;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> anyhow::Result<AppConfig> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read config: {}", self.path.display()))?;
        self.decode(&bytes)
    }

    /// Loads the file if present, otherwise returns the built-in defaults.
    pub fn load_or_default(&self) -> anyhow::Result<AppConfig> {
        match std::fs::read(&self.path) {
            Ok(bytes) => self.decode(&bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!(
                    "no config at {}; using built-in defaults",
                    self.path.display()
                );
                Ok(default_app_config())
            }
            Err(e) => Err(anyhow::Error::new(e))
                .with_context(|| format!("read config: {}", self.path.display())),
        }
    }

    fn decode(&self, bytes: &[u8]) -> anyhow::Result<AppConfig> {
        let cfg: AppConfig = serde_json::from_slice(bytes).context("decode config JSON")?;
        cfg.validate()
            .with_context(|| format!("invalid config: {}", self.path.display()))?;
        Ok(cfg)
    }

    pub fn save(&self, cfg: &AppConfig) -> anyhow::Result<()> {
        cfg.validate().context("refusing to save invalid config")?;
        let json = serde_json::to_vec_pretty(cfg).context("encode config JSON")?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create config directory: {}", dir.display()))?;

        // Stage next to the target so the final rename stays on one filesystem.
        let mut staged = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("create temp file in {}", dir.display()))?;
        staged.write_all(&json).context("write staged config")?;
        staged
            .persist(&self.path)
            .map_err(|e| anyhow::Error::new(e.error))
            .with_context(|| format!("replace file: {}", self.path.display()))?;
        Ok(())
    }

    /// Writes the built-in defaults. An existing file is kept unless `overwrite`.
    pub fn init(&self, overwrite: bool) -> anyhow::Result<AppConfig> {
        if !overwrite && self.path.exists() {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite",
                self.path.display()
            );
        }
        let cfg = default_app_config();
        self.save(&cfg)?;
        Ok(cfg)
    }
}
