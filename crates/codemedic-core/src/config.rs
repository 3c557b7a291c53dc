use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::MedicError;

/// Top-level CodeMedic configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub medic: MedicConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for MedicConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub telegram: Option<TelegramConfig>,
}

/// Telegram bot config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelegramConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub bot_token: String,
    /// Allowed Telegram user IDs. Empty = allow all.
    #[serde(default)]
    pub allowed_users: Vec<i64>,
}

// --- Default value functions ---

fn default_name() -> String {
    "CodeMedic".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error: defaults are used and a notice is logged.
/// An empty `bot_token` falls back to the `TELEGRAM_BOT_TOKEN` env var.
pub fn load(path: &str) -> Result<Config, MedicError> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MedicError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str::<Config>(&content)
            .map_err(|e| MedicError::Config(format!("failed to parse config: {}", e)))?
    } else {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Config::default()
    };

    if let Some(ref mut tg) = config.channel.telegram {
        if tg.bot_token.is_empty() {
            if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
                tg.bot_token = token;
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.medic.name, "CodeMedic");
        assert_eq!(cfg.medic.log_level, "info");
        assert!(cfg.channel.telegram.is_none());
    }

    #[test]
    fn test_telegram_config_from_toml() {
        let toml_str = r#"
            [channel.telegram]
            enabled = true
            bot_token = "123:abc"
            allowed_users = [42, 7]
        "#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        let tg = cfg.channel.telegram.unwrap();
        assert!(tg.enabled);
        assert_eq!(tg.bot_token, "123:abc");
        assert_eq!(tg.allowed_users, vec![42, 7]);
    }

    #[test]
    fn test_allowed_users_default_empty() {
        let toml_str = r#"
            [channel.telegram]
            enabled = true
            bot_token = "123:abc"
        "#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert!(cfg.channel.telegram.unwrap().allowed_users.is_empty());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("__codemedic_no_such_config__.toml");
        let _ = std::fs::remove_file(&path);
        let cfg = load(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.medic.name, "CodeMedic");
        assert_eq!(cfg.medic.log_level, "info");
        assert!(cfg.channel.telegram.is_none());
    }

    #[test]
    fn test_medic_section_partial() {
        let toml_str = r#"
            [medic]
            log_level = "debug"
        "#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.medic.log_level, "debug");
        assert_eq!(cfg.medic.name, "CodeMedic");
    }
}
