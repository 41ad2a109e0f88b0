use crate::domain::error::AnuvadError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_allow_remote")]
    pub allow_remote: bool,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    pub database_path: Option<String>,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RemoteConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            provider: default_provider(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            allow_remote: true,
            enable_emoji: true,
            database_path: None,
            logging: Logging::default(),
            remote: RemoteConfig::default(),
        }
    }
}

// Defaults
fn default_source_lang() -> String {
    "en".to_string()
}
fn default_target_lang() -> String {
    "mr".to_string()
}
fn default_allow_remote() -> bool {
    true
}
fn default_enable_emoji() -> bool {
    true
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_provider() -> String {
    "gemini".to_string()
}
fn default_timeout_secs() -> u64 {
    20
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("anuvad").join("config.toml"))
}

/// Database path: config override, or ~/.config/anuvad/anuvad.db
pub fn get_database_path(config: &Config) -> PathBuf {
    if let Some(path) = &config.database_path {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("anuvad")
        .join("anuvad.db")
}

pub fn load_config() -> Result<Config, AnuvadError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match toml::from_str::<Config>(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), AnuvadError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| AnuvadError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| AnuvadError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(AnuvadError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
