use std::fs;

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub resend_api_key: Option<String>,
    pub relay_url: String,
    pub sender_address: String,
    pub operator_address: String,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
            resend_api_key: None,
            relay_url: email_relay::RESEND_API_URL.into(),
            sender_address: "contact@agentex.com".into(),
            operator_address: "nichedotsol@gmail.com".into(),
            max_body_bytes: 64 * 1024,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    bind_addr: Option<String>,
    relay_url: Option<String>,
    sender_address: Option<String>,
    operator_address: Option<String>,
    max_body_bytes: Option<usize>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from_sources(raw.as_deref(), |name| std::env::var(name).ok())
}

/// Defaults, then `server.toml`, then environment. The relay key is only read
/// from the environment.
pub fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        let file_cfg: FileSettings =
            toml::from_str(raw).with_context(|| format!("failed to parse {SETTINGS_FILE}"))?;
        if let Some(v) = file_cfg.bind_addr {
            settings.server_bind = v;
        }
        if let Some(v) = file_cfg.relay_url {
            settings.relay_url = v;
        }
        if let Some(v) = file_cfg.sender_address {
            settings.sender_address = v;
        }
        if let Some(v) = file_cfg.operator_address {
            settings.operator_address = v;
        }
        if let Some(v) = file_cfg.max_body_bytes {
            settings.max_body_bytes = v;
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    settings.resend_api_key = env("RESEND_API_KEY")
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());

    if let Some(v) = env("APP__RELAY_URL") {
        settings.relay_url = v;
    }
    if let Some(v) = env("APP__SENDER_ADDRESS") {
        settings.sender_address = v;
    }
    if let Some(v) = env("APP__OPERATOR_ADDRESS") {
        settings.operator_address = v;
    }
    if let Some(v) = env("APP__MAX_BODY_BYTES") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.max_body_bytes = parsed;
        }
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
