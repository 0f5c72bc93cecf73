// crates/message-catalog-core/src/runtime/global.rs
// ============================================================================
// Module: Global Catalog
// Description: Process-wide default catalog and the formatting macro.
// Purpose: Give call sites a catalog without threading one through every API.
// Dependencies: crate::runtime::{catalog, registry}, tracing
// ============================================================================

//! ## Overview
//! Applications build and bootstrap a [`Catalog`], then [`install`] it once.
//! Call sites format through [`global`] or [`format_message!`](crate::format_message).
//! Code that needs isolation, such as tests, uses its own `Catalog` instance.
//!
//! ## Invariants
//! - The fallback catalog is frozen and empty; reads never take a lock.
//! - Once [`global`] has been called, [`install`] always fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use crate::runtime::catalog::Catalog;
use crate::runtime::catalog::CatalogOptions;
use crate::runtime::registry::CatalogTable;

// ============================================================================
// SECTION: Global Instance
// ============================================================================

/// Installed process-wide catalog.
static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Installs `catalog` as the process-wide default.
///
/// # Errors
///
/// Returns `catalog` unchanged when a catalog is already installed, including
/// the empty fallback created by an earlier call to [`global`].
pub fn install(catalog: Catalog) -> Result<(), Catalog> {
    GLOBAL.set(catalog)
}

/// Returns the process-wide catalog, creating a frozen empty one if none was
/// installed.
#[must_use]
pub fn global() -> &'static Catalog {
    GLOBAL.get_or_init(|| {
        tracing::warn!("no message catalog installed; using an empty catalog");
        Catalog::from_table(CatalogTable::new(), CatalogOptions::default())
    })
}

/// Returns true once a catalog has been installed or the fallback created.
#[must_use]
pub fn is_installed() -> bool {
    GLOBAL.get().is_some()
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a message against the process-wide catalog.
///
/// Each argument is converted with [`MessageArg::from`](crate::MessageArg).
///
/// ```ignore
/// let text = format_message!(CORE_TIME_TO_EXPIRATION, "5 seconds");
/// ```
#[macro_export]
macro_rules! format_message {
    ($id:expr $(, $arg:expr)* $(,)?) => {
        $crate::global().format($id, &[ $( $crate::MessageArg::from($arg) ),* ])
    };
}
