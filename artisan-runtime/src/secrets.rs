use anyhow::Context;

/// Where we store secrets in the OS keyring.
///
/// This is intentionally constant so upgrades don't orphan secrets.
const SERVICE: &str = "artisan";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKey {
    GeminiApiKey,
}

impl SecretKey {
    fn user(self) -> &'static str {
        match self {
            SecretKey::GeminiApiKey => "gemini_api_key",
        }
    }

    /// Environment variable that overrides the keyring entry.
    pub fn env_var(self) -> &'static str {
        match self {
            SecretKey::GeminiApiKey => "GEMINI_API_KEY",
        }
    }
}

fn entry(key: SecretKey) -> anyhow::Result<keyring::Entry> {
    keyring::Entry::new(SERVICE, key.user())
        .with_context(|| format!("open keyring entry {SERVICE}/{}", key.user()))
}

/// Stores a trimmed, non-blank value in the keyring.
pub fn set_secret(key: SecretKey, value: &str) -> anyhow::Result<()> {
    let value = normalize_secret(value)?;
    entry(key)?
        .set_password(value)
        .with_context(|| format!("store {} in keyring", key.user()))?;
    log::info!("stored {} in the OS keyring", key.user());
    Ok(())
}

pub fn get_secret(key: SecretKey) -> anyhow::Result<Option<String>> {
    match entry(key)?.get_password() {
        Ok(v) => Ok(Some(v)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(anyhow::Error::new(e)).context("get secret"),
    }
}

/// Removes the keyring entry. Returns whether one existed.
pub fn delete_secret(key: SecretKey) -> anyhow::Result<bool> {
    match entry(key)?.delete_credential() {
        Ok(()) => Ok(true),
        Err(keyring::Error::NoEntry) => Ok(false),
        Err(e) => Err(anyhow::Error::new(e))
            .with_context(|| format!("delete {} from keyring", key.user())),
    }
}

fn normalize_secret(value: &str) -> anyhow::Result<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        anyhow::bail!("refusing to store an empty API key");
    }
    Ok(trimmed)
}

/// Environment first, then the keyring. Blank values count as absent.
pub fn resolve_secret(key: SecretKey) -> anyhow::Result<Option<String>> {
    resolve_with(std::env::var(key.env_var()).ok(), || get_secret(key))
}

fn resolve_with(
    env_value: Option<String>,
    keyring: impl FnOnce() -> anyhow::Result<Option<String>>,
) -> anyhow::Result<Option<String>> {
    if let Some(v) = env_value.filter(|v| !v.trim().is_empty()) {
        return Ok(Some(v));
    }
    Ok(keyring()?.filter(|v| !v.trim().is_empty()))
}
