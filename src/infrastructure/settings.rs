use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_GUILD_CONFIG_PATH: &str = "guild_config.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("DISCORD_TOKEN not found in environment or .env file")]
    MissingToken,
    #[error("HTTP_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

/// Process configuration read from the environment.
#[derive(Clone)]
pub struct Settings {
    pub discord_token: String,
    pub fallback_log_channel: Option<u64>,
    pub http_port: u16,
    pub guild_config_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let discord_token = lookup("DISCORD_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(SettingsError::MissingToken)?;

        let fallback_log_channel = match lookup("LOG_CHANNEL_ID") {
            None => {
                warn!("LOG_CHANNEL_ID not set, relying on per-guild configuration");
                None
            }
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(id) if id != 0 => Some(id),
                _ => {
                    warn!("LOG_CHANNEL_ID {:?} is not a channel id, ignoring it", raw);
                    None
                }
            },
        };

        let http_port = match lookup("HTTP_PORT") {
            None => DEFAULT_HTTP_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| SettingsError::InvalidPort(raw))?,
        };

        let guild_config_path = lookup("GUILD_CONFIG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GUILD_CONFIG_PATH));

        Ok(Self {
            discord_token,
            fallback_log_channel,
            http_port,
            guild_config_path,
        })
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("discord_token", &"<redacted>")
            .field("fallback_log_channel", &self.fallback_log_channel)
            .field("http_port", &self.http_port)
            .field("guild_config_path", &self.guild_config_path)
            .finish()
    }
}
