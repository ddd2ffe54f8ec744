use crate::constants::{DEFAULT_SERVICE_URL, SERVICE_URL_ENV};
use crate::errors::{ChatError, ChatResult};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the chat service; `/chat` is appended per request.
    pub service_url: String,
    pub log_level: String,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            log_level: "info".to_string(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> String {
    dirs::home_dir()
        .map(|home| home.join(".config").join("weather-chat").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
        .to_string_lossy()
        .into_owned()
}

/// Loads the config from `~/.config/weather-chat/config.json`, writing the
/// defaults there first if the file does not exist. `WEATHER_CHAT_SERVICE_URL`
/// (from the environment or `.env`) overrides the service address.
pub fn load_config() -> ChatResult<Config> {
    dotenv::dotenv().ok();

    let config_path = get_config_path()?;
    let mut config = load_or_create(&config_path)?;

    if let Ok(url) = env::var(SERVICE_URL_ENV) {
        log::debug!("Service URL overridden by {}", SERVICE_URL_ENV);
        config.service_url = url;
    }

    validate_config(&config)?;
    Ok(config)
}

pub fn load_or_create(config_path: &Path) -> ChatResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path)
            .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))?;

        return Ok(config);
    }

    let config = Config::default();

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ChatError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(&config)?;
    fs::write(config_path, config_str)
        .map_err(|e| ChatError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(config)
}

fn get_config_path() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir
        .join(".config")
        .join("weather-chat")
        .join("config.json"))
}

pub fn validate_config(config: &Config) -> ChatResult<()> {
    let url = Url::parse(&config.service_url).map_err(|e| {
        ChatError::config_error(format!(
            "Invalid service_url '{}': {}",
            config.service_url, e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ChatError::config_error(format!(
            "service_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if !LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
        return Err(ChatError::config_error(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }

    if config.log_dir.is_empty() {
        return Err(ChatError::config_error("log_dir is required"));
    }

    Ok(())
}
