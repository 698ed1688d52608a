use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Credentials for the weather endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub api_key: String,
}

/// Credentials and routing for the bot delivery endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,

    /// Optional HTTP(S) proxy used when reaching the bot endpoint.
    #[serde(default)]
    pub https_proxy: Option<String>,
}

/// Top-level configuration stored on disk.
///
/// Loaded once at startup and immutable afterwards. Example TOML:
///
/// ```toml
/// [weather]
/// api_key = "..."
///
/// [telegram]
/// bot_token = "..."
/// chat_id = "..."
/// https_proxy = "http://localhost:32000"   # optional
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub weather: WeatherConfig,
    pub telegram: TelegramConfig,
}

impl Config {
    /// Load config from the platform config directory.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Err(anyhow!(
                "No config file found at {}.\n\
                 Hint: create it with [weather] api_key and [telegram] bot_token / chat_id.",
                path.display()
            ));
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path, e.g. the `--config` flag.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wxnotify", "wxnotify")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg: Config = toml::from_str(
            r#"
            [weather]
            api_key = "AMAP_KEY"

            [telegram]
            bot_token = "123:abc"
            chat_id = "-100200300"
            https_proxy = "http://localhost:32000"
            "#,
        )
        .expect("full config must parse");

        assert_eq!(cfg.weather.api_key, "AMAP_KEY");
        assert_eq!(cfg.telegram.bot_token, "123:abc");
        assert_eq!(cfg.telegram.chat_id, "-100200300");
        assert_eq!(cfg.telegram.https_proxy.as_deref(), Some("http://localhost:32000"));
    }

    #[test]
    fn proxy_is_optional() {
        let cfg: Config = toml::from_str(
            r#"
            [weather]
            api_key = "AMAP_KEY"

            [telegram]
            bot_token = "123:abc"
            chat_id = "42"
            "#,
        )
        .expect("config without proxy must parse");

        assert!(cfg.telegram.https_proxy.is_none());
    }

    #[test]
    fn missing_credentials_fail_to_parse() {
        let err = toml::from_str::<Config>(
            r#"
            [weather]
            api_key = "AMAP_KEY"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("telegram"));
    }
}
