// crates/directory-server-messages/src/lib.rs
// ============================================================================
// Module: Directory Server Messages Library
// Description: Compiled-in directory server messages and catalog bootstrap.
// Purpose: Build, freeze, and install the directory server message catalog.
// Dependencies: message-catalog-core, message-catalog-config, thiserror
// ============================================================================

//! ## Overview
//! Declares the directory server's message modules and wires them into a
//! [`Catalog`] configured from [`CatalogConfig`]. Servers call
//! [`install_directory_catalog`] once at startup; tools that only need a
//! private catalog (for example a message dump) call
//! [`bootstrap_directory_catalog`].
//!
//! ## Invariants
//! - Packed identifiers of declared messages never change between releases.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod messages;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use message_catalog_config::CatalogConfig;
use message_catalog_config::ConfigError;
use message_catalog_core::BootstrapReport;
use message_catalog_core::Catalog;
use message_catalog_core::CatalogError;
use message_catalog_core::bootstrap;
use message_catalog_core::install;
use thiserror::Error;

pub use messages::MODULES;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building or installing the directory catalog.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DirectoryCatalogError {
    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Registration or the duplicate policy failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// A process-wide catalog was already installed.
    #[error("a global message catalog is already installed")]
    AlreadyInstalled,
}

// ============================================================================
// SECTION: Bootstrap
// ============================================================================

/// Builds a frozen catalog holding every module in [`MODULES`].
///
/// # Errors
///
/// Returns [`CatalogError`] when a definition is invalid or when duplicates
/// are found under the reject policy.
pub fn bootstrap_directory_catalog(
    config: &CatalogConfig,
) -> Result<(Catalog, BootstrapReport), CatalogError> {
    let catalog = Catalog::new(config.catalog_options());
    let report = bootstrap(&catalog, MODULES)?;
    Ok((catalog, report))
}

/// Loads configuration from `path` (or the default locations) and builds the
/// directory catalog.
///
/// # Errors
///
/// Returns [`DirectoryCatalogError`] when loading or bootstrap fails.
pub fn load_directory_catalog(
    path: Option<&Path>,
) -> Result<(Catalog, BootstrapReport), DirectoryCatalogError> {
    let config = CatalogConfig::load(path)?;
    Ok(bootstrap_directory_catalog(&config)?)
}

/// Builds the directory catalog and installs it as the process-wide catalog.
///
/// # Errors
///
/// Returns [`DirectoryCatalogError::AlreadyInstalled`] when another catalog
/// was installed first, or the bootstrap error.
pub fn install_directory_catalog(
    config: &CatalogConfig,
) -> Result<BootstrapReport, DirectoryCatalogError> {
    let (catalog, report) = bootstrap_directory_catalog(config)?;
    install(catalog).map_err(|_| DirectoryCatalogError::AlreadyInstalled)?;
    tracing::info!(entries = report.entries, "directory message catalog installed");
    Ok(report)
}
