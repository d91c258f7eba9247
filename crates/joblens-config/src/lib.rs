//! # joblens-config
//!
//! Layered configuration loading for joblens using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JOBLENS_*` prefix, `__` as separator)
//! 2. Project-local `joblens.toml`
//! 3. User-level `~/.config/joblens/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `JOBLENS_API__BASE_URL` -> `api.base_url`,
//! `JOBLENS_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc. The
//! `__` (double underscore) separates nested config sections.

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JoblensConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl JoblensConfig {
    /// Load configuration from all sources (TOML files + environment).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if `.env`
    /// loading is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any layer fails to merge or extract, or
    /// if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads a `.env` from the current directory (if any) before building
    /// the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any layer fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or stack extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: user-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: project-local config
        let local_path = PathBuf::from("joblens.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: environment variables (highest priority)
        figment.merge(Env::prefixed("JOBLENS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("joblens").join("config.toml"))
    }

    /// Reject values figment accepts but the client cannot run with.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = JoblensConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.general.default_limit, 50);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = JoblensConfig::figment();
        let config: JoblensConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.general.default_limit, 50);
    }
}
