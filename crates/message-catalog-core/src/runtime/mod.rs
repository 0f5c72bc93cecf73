// crates/message-catalog-core/src/runtime/mod.rs
// ============================================================================
// Module: Message Catalog Runtime
// Description: Registry, formatter, bootstrap, and the global instance.
// Purpose: Hold registered templates and turn identifiers into text.
// Dependencies: crate::{core, interfaces}, arc-swap, parking_lot, tracing
// ============================================================================

//! ## Overview
//! Runtime modules own the process-wide state: the registry table, the
//! phased catalog that publishes it, the bootstrap that fills it, and the
//! formatter that reads it.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod bootstrap;
pub mod catalog;
pub mod formatter;
pub mod global;
pub mod registry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use bootstrap::BootstrapReport;
pub use bootstrap::bootstrap;
pub use bootstrap::bootstrap_concurrent;
pub use catalog::Catalog;
pub use catalog::CatalogOptions;
pub use catalog::CatalogPhase;
pub use catalog::DuplicatePolicy;
pub use formatter::ArgMismatch;
pub use formatter::FormatOptions;
pub use formatter::check_arguments;
pub use formatter::render;
pub use formatter::render_unknown;
pub use global::global;
pub use global::install;
pub use global::is_installed;
pub use registry::CatalogEntry;
pub use registry::CatalogError;
pub use registry::CatalogTable;
pub use registry::Registration;
