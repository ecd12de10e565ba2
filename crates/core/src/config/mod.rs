//! Parser configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (NEWSPARSE_*)
//! 2. TOML config file (if NEWSPARSE_CONFIG_FILE set)
//! 3. Built-in defaults

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Knobs of the article content pipeline.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (NEWSPARSE_*)
/// 2. TOML config file (if NEWSPARSE_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Keep the reporter byline on the first content line.
    ///
    /// Set via NEWSPARSE_INCLUDE_REPORTER_NAME environment variable.
    #[serde(default)]
    pub include_reporter_name: bool,

    /// Minimum fraction of Korean characters the body text must contain.
    ///
    /// Set via NEWSPARSE_MIN_TARGET_SCRIPT_RATIO environment variable.
    #[serde(default = "default_min_target_script_ratio")]
    pub min_target_script_ratio: f64,
}

fn default_min_target_script_ratio() -> f64 {
    0.5
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { include_reporter_name: false, min_target_script_ratio: default_min_target_script_ratio() }
    }
}

impl ParserConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("NEWSPARSE_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed("NEWSPARSE_").map(|key| key.as_str().to_lowercase().into()));

        Self::from_figment(&figment)
    }

    /// Extract and validate a configuration from an already assembled figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Copy of this configuration with the byline flag replaced.
    pub fn with_reporter_name(self, include_reporter_name: bool) -> Self {
        Self { include_reporter_name, ..self }
    }
}
