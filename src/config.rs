//! Layered configuration: defaults, `~/.gemini-photo-edit/config.json`, then environment.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{client::DEFAULT_BASE_URL, models::DEFAULT_MODEL};

const CONFIG_DIR: &str = ".gemini-photo-edit";
const CONFIG_FILE: &str = "config.json";
const ENV_PREFIX: &str = "PHOTO_EDIT_";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider held a value of the wrong shape.
    #[error("Invalid configuration: {0}")]
    Extract(#[from] figment::Error),
}

/// Settings for reaching the image model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API key sent with every request. Not validated locally.
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// API host
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the default file location and the environment.
    ///
    /// Later sources win: defaults, the JSON file, `PHOTO_EDIT_*` variables, and
    /// finally `GOOGLE_API_KEY`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(default_config_path()).extract().map_err(Into::into)
    }

    /// Loads configuration using the given JSON file instead of the default one.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::figment(Some(path.as_ref().to_path_buf()))
            .extract()
            .map_err(Into::into)
    }

    fn figment(path: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Json::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&["GOOGLE_API_KEY"]).map(|_| "api_key".into()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_sources() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config = Config::load_from("missing.json").unwrap();
            assert_eq!(config, Config::default());
            assert!(config.api_key.is_empty());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "config.json",
                r#"{ "api_key": "from-file", "model": "gemini-file" }"#,
            )?;
            jail.set_env("PHOTO_EDIT_MODEL", "gemini-env");

            let config = Config::load_from("config.json").unwrap();
            assert_eq!(config.api_key, "from-file");
            assert_eq!(config.model, "gemini-env");
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
            Ok(())
        });
    }

    #[test]
    fn google_api_key_wins() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PHOTO_EDIT_API_KEY", "prefixed");
            jail.set_env("GOOGLE_API_KEY", "google");
            assert_eq!(Config::load_from("none.json").unwrap().api_key, "google");
            Ok(())
        });
    }
}
