// crates/message-catalog-core/src/lib.rs
// ============================================================================
// Module: Message Catalog Core Library
// Description: Public API surface for the message catalog.
// Purpose: Expose identifiers, templates, the catalog, and bootstrap helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Every diagnostic, alert, and protocol-result message is identified by a
//! stable packed integer ([`MessageId`]) combining a category, a severity,
//! and an ordinal. Subsystems declare their messages as constants with
//! [`define_messages!`], the bootstrap registers them into a [`Catalog`], and
//! call sites format them with positional arguments.
//!
//! The packed value of a message is an external contract: it appears in logs,
//! alerts, and result codes, and must not change across releases.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::DuplicateRecord;
pub use interfaces::MessageModule;
pub use interfaces::ModuleReport;
pub use interfaces::StaticModule;
pub use runtime::ArgMismatch;
pub use runtime::BootstrapReport;
pub use runtime::Catalog;
pub use runtime::CatalogEntry;
pub use runtime::CatalogError;
pub use runtime::CatalogOptions;
pub use runtime::CatalogPhase;
pub use runtime::CatalogTable;
pub use runtime::DuplicatePolicy;
pub use runtime::FormatOptions;
pub use runtime::Registration;
pub use runtime::bootstrap;
pub use runtime::bootstrap_concurrent;
pub use runtime::check_arguments;
pub use runtime::global;
pub use runtime::install;
pub use runtime::is_installed;
pub use runtime::render;
pub use runtime::render_unknown;
