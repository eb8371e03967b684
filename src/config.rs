use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_SENDLY_BASE_URL: &str = "https://sendly.live/api/v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sendly: SendlyConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendlyConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SendlyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

/// Where the HTML pages come from. Without a directory the pages bundled
/// into the binary are served.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    DEFAULT_SENDLY_BASE_URL.to_string()
}

impl Config {
    /// Loads `CONFIG_PATH` (default `config.toml`) if present, then applies
    /// environment overrides and checks that the API key is set.
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::parse(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "cannot read config file {config_path}: {e}"
                )));
            }
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(contents: &str) -> AppResult<Self> {
        toml::from_str(contents)
            .map_err(|e| AppError::ConfigError(format!("invalid config file: {e}")))
    }

    /// Environment variables win over file values.
    pub fn apply_env(&mut self) -> AppResult<()> {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("PORT")
            && !v.is_empty()
        {
            self.server.port = v
                .parse()
                .map_err(|_| AppError::ConfigError(format!("invalid PORT value: {v}")))?;
        }
        if let Ok(v) = env::var("SENDLY_API_KEY") {
            self.sendly.api_key = v;
        }
        if let Ok(v) = env::var("SENDLY_BASE_URL") {
            self.sendly.base_url = v;
        }
        if let Ok(v) = env::var("TEMPLATES_DIR")
            && !v.is_empty()
        {
            self.templates.dir = Some(PathBuf::from(v));
        }
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.sendly.api_key.is_empty() {
            return Err(AppError::ConfigError(
                "SENDLY_API_KEY environment variable is required".to_string(),
            ));
        }
        Ok(())
    }
}
