// crates/message-catalog-core/src/interfaces/mod.rs
// ============================================================================
// Module: Message Catalog Interfaces
// Description: Contract between subsystems and the catalog bootstrap.
// Purpose: Let each subsystem contribute its message table independently.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! A [`MessageModule`] is one subsystem's contribution to the catalog. The
//! bootstrap asks every module to register itself and aggregates the
//! per-module [`ModuleReport`]s; duplicate handling is decided by the
//! bootstrap, not by the module.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::MessageDef;
use crate::core::MessageId;
use crate::runtime::Catalog;
use crate::runtime::CatalogError;
use crate::runtime::bootstrap::register_module;

// ============================================================================
// SECTION: Reports
// ============================================================================

/// A registration refused because the identifier already had a different
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRecord {
    /// Module that attempted the registration.
    pub module: String,
    /// Conflicting identifier.
    pub id: MessageId,
    /// Template kept in the catalog.
    pub existing: String,
    /// Template that was refused.
    pub rejected: String,
}

/// Outcome of registering one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    /// Module name.
    pub module: String,
    /// Definitions that added a new entry.
    pub inserted: usize,
    /// Definitions whose identical template was already registered.
    pub unchanged: usize,
    /// Definitions refused as conflicting duplicates.
    pub duplicates: Vec<DuplicateRecord>,
}

impl ModuleReport {
    /// Creates an empty report for `module`.
    #[must_use]
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// SECTION: Message Module
// ============================================================================

/// A subsystem's set of compiled-in message definitions.
///
/// # Invariants
/// - `definitions` returns the same slice on every call.
pub trait MessageModule: Send + Sync {
    /// Returns a short name used in bootstrap logs and reports.
    fn name(&self) -> &str;

    /// Returns the module's definitions in declaration order.
    fn definitions(&self) -> &[MessageDef];

    /// Registers every definition with `catalog`.
    ///
    /// Conflicting duplicates are recorded in the report and do not stop
    /// registration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for invalid templates, signature mismatches,
    /// or a frozen catalog.
    fn register(&self, catalog: &Catalog) -> Result<ModuleReport, CatalogError> {
        register_module(catalog, self.name(), self.definitions())
    }
}

/// A [`MessageModule`] backed by a static definition table.
#[derive(Debug, Clone, Copy)]
pub struct StaticModule {
    /// Module name.
    name: &'static str,
    /// Definition table.
    definitions: &'static [MessageDef],
}

impl StaticModule {
    /// Creates a module from a name and a table produced by
    /// [`define_messages!`](crate::define_messages).
    #[must_use]
    pub const fn new(name: &'static str, definitions: &'static [MessageDef]) -> Self {
        Self {
            name,
            definitions,
        }
    }
}

impl MessageModule for StaticModule {
    fn name(&self) -> &str {
        self.name
    }

    fn definitions(&self) -> &[MessageDef] {
        self.definitions
    }
}
