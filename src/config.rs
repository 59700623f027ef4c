pub mod keybindings;

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::utils;
use keybindings::KeyBindings;

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    /// Layered configuration: embedded defaults, overridden by any config
    /// file found in the user config directory. A missing user config is
    /// fine; the embedded defaults are complete.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config =
            json5::from_str(CONFIG).map_err(|e| ConfigError::Message(e.to_string()))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("_config_dir", config_dir.to_str().unwrap_or_default())?;

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
            log::info!("No user configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(key.clone()).or_insert(*action);
        }

        Ok(cfg)
    }
}
