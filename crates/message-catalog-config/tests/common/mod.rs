// crates/message-catalog-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for message-catalog-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use message_catalog_config::CatalogConfig;
use message_catalog_config::ConfigError;

/// Parses a TOML string into a `CatalogConfig` without validation.
pub fn config_from_toml(toml_str: &str) -> Result<CatalogConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<CatalogConfig, toml::de::Error> {
    config_from_toml("")
}

/// Returns a minimal config with the provided missing-argument marker.
pub fn config_with_marker(marker: &str) -> Result<CatalogConfig, toml::de::Error> {
    let mut config = minimal_config()?;
    config.format.missing_argument_marker = Some(marker.to_string());
    Ok(config)
}

/// Checks that `result` failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
