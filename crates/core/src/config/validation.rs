//! Configuration validation rules.
//!
//! This module provides validation logic for `ParserConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::ParserConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl ParserConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `min_target_script_ratio` is NaN or
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratio = self.min_target_script_ratio;
        if ratio.is_nan() || !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigError::Invalid {
                field: "min_target_script_ratio".into(),
                reason: "must be between 0.0 and 1.0".into(),
            });
        }

        if ratio == 0.0 {
            tracing::warn!("min_target_script_ratio is 0; the script gate will accept any content");
        }

        Ok(())
    }
}
