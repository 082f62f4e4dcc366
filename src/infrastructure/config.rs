use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{presentation::config::keybindings::KeyBindings, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_ENDPOINT: &str = "https://apis.ccbp.in/videos/all";
pub const DEFAULT_TOKEN_NAME: &str = "jwt_token";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default, rename = "_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default, rename = "_config_dir")]
    pub config_dir: PathBuf,
}

/// Where videos are fetched from and which stored token authenticates the request
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub token_name: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token_name: DEFAULT_TOKEN_NAME.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dark_theme: bool,
}

impl Config {
    /// Loads the user configuration from the standard directories
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// The configuration shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Layers optional user files in `config_dir` over the embedded defaults.
    ///
    /// User keybindings are merged into the default ones, so a file only needs
    /// the bindings it changes.
    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?
            .set_default("dark_theme", default_config.dark_theme)?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }

        if cfg.api.endpoint.is_empty() {
            return Err(ConfigError::NotFound(String::from("api.endpoint")));
        }

        Ok(cfg)
    }
}
