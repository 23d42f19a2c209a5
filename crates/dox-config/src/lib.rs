//! # dox-config
//!
//! Layered configuration loading for doxsig using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOXSIG_*` prefix, `__` as separator)
//! 2. Project-level `.doxsig/config.toml`
//! 3. User-level `~/.config/doxsig/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOXSIG_PARSER__MAX_LINES` -> `parser.max_lines`,
//! `DOXSIG_SMART_TEXT__ENABLED` -> `smart_text.enabled`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dox_config::DoxConfig;
//!
//! let config = DoxConfig::load_with_dotenv().expect("config");
//! let options = config.parse_options();
//! println!("scanning at most {} lines", options.max_lines);
//! ```

mod error;
mod parser;
mod smart_text;

pub use error::ConfigError;
pub use parser::ParserConfig;
pub use smart_text::SmartTextConfig;

use dox_parser::{ParseOptions, SmartTemplates};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of every environment variable the config reads.
pub const ENV_PREFIX: &str = "DOXSIG_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DoxConfig {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub smart_text: SmartTextConfig,
}

impl DoxConfig {
    /// Load and validate configuration from TOML files and environment
    /// variables.
    ///
    /// Does NOT call `dotenvy`; use [`DoxConfig::load_with_dotenv`] for
    /// `.env` support.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Figment`] for unreadable or mistyped sources,
    /// [`ConfigError::InvalidValue`] when [`DoxConfig::validate`] fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`DoxConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate from an already built figment.
    ///
    /// # Errors
    ///
    /// See [`DoxConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can merge their own providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".doxsig/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parser.validate()?;
        self.smart_text.validate()
    }

    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        self.parser.parse_options()
    }

    /// `None` when smart text is disabled.
    #[must_use]
    pub fn smart_templates(&self) -> Option<SmartTemplates> {
        self.smart_text.templates()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("doxsig").join("config.toml"))
    }

    /// Load `.env` from the workspace root, walking up from
    /// `CARGO_MANIFEST_DIR` when it is set, else from the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_valid() {
        let config = DoxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.parse_options(), ParseOptions::default());
        assert_eq!(config.smart_templates(), Some(SmartTemplates::default()));
    }

    #[test]
    fn defaults_extract_from_bare_figment() {
        let figment = Figment::from(Serialized::defaults(DoxConfig::default()));
        let config = DoxConfig::from_figment(&figment).expect("should extract defaults");
        assert_eq!(config, DoxConfig::default());
    }
}
