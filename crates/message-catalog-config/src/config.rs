// crates/message-catalog-config/src/config.rs
// ============================================================================
// Module: Message Catalog Configuration
// Description: Configuration loading and validation for the message catalog.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: message-catalog-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every field has a default, so an empty file (or no `[format]` table) yields
//! the same catalog behavior as [`CatalogOptions::default`]. A validated
//! config converts into [`CatalogOptions`] with [`CatalogConfig::catalog_options`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use message_catalog_core::CatalogOptions;
use message_catalog_core::DuplicatePolicy;
use message_catalog_core::FormatOptions;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "message-catalog.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "MESSAGE_CATALOG_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of the missing-argument marker, in characters.
pub const MAX_MISSING_ARGUMENT_MARKER_LENGTH: usize = 32;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Message catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Registration behavior.
    #[serde(default)]
    pub registration: RegistrationConfig,
    /// Formatting behavior.
    #[serde(default)]
    pub format: FormatConfig,
}

impl CatalogConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The path is `path` when given, otherwise the value of
    /// [`CONFIG_ENV_VAR`], otherwise `message-catalog.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.format.validate()
    }

    /// Converts the configuration into catalog options.
    #[must_use]
    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            duplicate_policy: self.registration.duplicate_policy.into(),
            allow_late_registration: self.registration.allow_late_registration,
            format: FormatOptions {
                missing_argument_marker: self.format.missing_argument_marker.clone(),
                log_argument_mismatches: self.format.log_argument_mismatches,
            },
        }
    }
}

/// Handling of conflicting registrations at bootstrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicyConfig {
    /// Keep the first template, log the conflict, and continue.
    #[default]
    Report,
    /// Fail bootstrap when any conflict is seen.
    Reject,
}

impl From<DuplicatePolicyConfig> for DuplicatePolicy {
    fn from(value: DuplicatePolicyConfig) -> Self {
        match value {
            DuplicatePolicyConfig::Report => Self::Report,
            DuplicatePolicyConfig::Reject => Self::Reject,
        }
    }
}

/// Registration configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationConfig {
    /// Handling of conflicting registrations.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicyConfig,
    /// Accept registrations after the catalog is frozen.
    #[serde(default)]
    pub allow_late_registration: bool,
}

/// Formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatConfig {
    /// Text rendered for placeholders without an argument.
    #[serde(default)]
    pub missing_argument_marker: Option<String>,
    /// Emit a debug event when arguments do not match the template.
    #[serde(default = "default_log_argument_mismatches")]
    pub log_argument_mismatches: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            missing_argument_marker: None,
            log_argument_mismatches: default_log_argument_mismatches(),
        }
    }
}

impl FormatConfig {
    /// Validates formatting configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        let Some(marker) = &self.missing_argument_marker else {
            return Ok(());
        };
        if marker.is_empty() {
            return Err(ConfigError::Invalid(
                "format.missing_argument_marker must be non-empty".to_string(),
            ));
        }
        if marker.chars().count() > MAX_MISSING_ARGUMENT_MARKER_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "format.missing_argument_marker exceeds {MAX_MISSING_ARGUMENT_MARKER_LENGTH} \
                 characters"
            )));
        }
        if marker.chars().any(char::is_control) {
            return Err(ConfigError::Invalid(
                "format.missing_argument_marker must not contain control characters".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Default for `format.log_argument_mismatches`.
const fn default_log_argument_mismatches() -> bool {
    true
}
