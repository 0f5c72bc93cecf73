// crates/message-catalog-core/src/runtime/bootstrap.rs
// ============================================================================
// Module: Catalog Bootstrap
// Description: Registers message modules and freezes the catalog.
// Purpose: Apply the duplicate policy once, over every module's outcome.
// Dependencies: crate::{core, interfaces, runtime}, tracing
// ============================================================================

//! ## Overview
//! Bootstrap registers each [`MessageModule`] with the catalog, collects the
//! per-module reports, applies the [`DuplicatePolicy`], and freezes the
//! catalog on success. [`bootstrap_concurrent`] runs module registration on
//! scoped threads; the catalog's writer lock serializes the inserts.
//!
//! ## Invariants
//! - Invalid templates and signature mismatches abort before the freeze.
//! - Under [`DuplicatePolicy::Reject`] a catalog with conflicting duplicates
//!   is never frozen.
//! - The first template registered for an identifier is the one kept.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::panic;
use std::thread;

use serde::Serialize;

use crate::core::MessageDef;
use crate::interfaces::DuplicateRecord;
use crate::interfaces::MessageModule;
use crate::interfaces::ModuleReport;
use crate::runtime::catalog::Catalog;
use crate::runtime::catalog::DuplicatePolicy;
use crate::runtime::registry::CatalogError;
use crate::runtime::registry::Registration;

// ============================================================================
// SECTION: Report
// ============================================================================

/// Aggregate outcome of a successful bootstrap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    /// Per-module outcomes, in module order.
    pub modules: Vec<ModuleReport>,
    /// Entries in the frozen catalog.
    pub entries: usize,
}

impl BootstrapReport {
    /// Returns the number of definitions that added an entry.
    #[must_use]
    pub fn inserted(&self) -> usize {
        self.modules.iter().map(|module| module.inserted).sum()
    }

    /// Returns the number of identical re-registrations.
    #[must_use]
    pub fn unchanged(&self) -> usize {
        self.modules.iter().map(|module| module.unchanged).sum()
    }

    /// Iterates over conflicting registrations across all modules.
    pub fn duplicates(&self) -> impl Iterator<Item = &DuplicateRecord> {
        self.modules.iter().flat_map(|module| module.duplicates.iter())
    }

    /// Returns the number of conflicting registrations.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.modules.iter().map(|module| module.duplicates.len()).sum()
    }
}

// ============================================================================
// SECTION: Module Registration
// ============================================================================

/// Registers one module's definitions, recording duplicates.
///
/// # Errors
///
/// Returns the first [`CatalogError`] other than a duplicate registration.
pub fn register_module(
    catalog: &Catalog,
    module: &str,
    definitions: &[MessageDef],
) -> Result<ModuleReport, CatalogError> {
    let mut report = ModuleReport::new(module);
    for def in definitions {
        let id = def.id();
        match catalog.register_definition(def) {
            Ok(Registration::Inserted) => report.inserted += 1,
            Ok(Registration::Unchanged) => {
                tracing::debug!(
                    module,
                    message_id = id.raw(),
                    "identical message already registered"
                );
                report.unchanged += 1;
            }
            Err(CatalogError::DuplicateRegistration {
                id,
                existing,
                rejected,
            }) => {
                tracing::warn!(
                    module,
                    message_id = id.raw(),
                    category = %id.category(),
                    kept = %existing,
                    rejected = %rejected,
                    "duplicate message registration; keeping the first template"
                );
                report.duplicates.push(DuplicateRecord {
                    module: module.to_string(),
                    id,
                    existing,
                    rejected,
                });
            }
            Err(err) => {
                tracing::error!(
                    module,
                    message_id = id.raw(),
                    error = %err,
                    "message registration failed"
                );
                return Err(err);
            }
        }
    }
    Ok(report)
}

// ============================================================================
// SECTION: Bootstrap
// ============================================================================

/// Registers `modules` in order, applies the duplicate policy, and freezes.
///
/// # Errors
///
/// Returns the first fatal [`CatalogError`], or
/// [`CatalogError::DuplicatesRejected`] under [`DuplicatePolicy::Reject`].
pub fn bootstrap(
    catalog: &Catalog,
    modules: &[&dyn MessageModule],
) -> Result<BootstrapReport, CatalogError> {
    let mut reports = Vec::with_capacity(modules.len());
    for module in modules {
        reports.push(module.register(catalog)?);
    }
    finish(catalog, reports)
}

/// Registers each module on its own scoped thread, then applies the duplicate
/// policy and freezes.
///
/// Which of two conflicting templates is kept depends on thread scheduling;
/// module reports are still returned in module order.
///
/// # Errors
///
/// Returns the first fatal [`CatalogError`] in module order, or
/// [`CatalogError::DuplicatesRejected`] under [`DuplicatePolicy::Reject`].
pub fn bootstrap_concurrent(
    catalog: &Catalog,
    modules: &[&dyn MessageModule],
) -> Result<BootstrapReport, CatalogError> {
    let outcomes = thread::scope(|scope| {
        let handles = modules
            .iter()
            .map(|module| scope.spawn(move || module.register(catalog)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect::<Vec<_>>()
    });
    let reports = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;
    finish(catalog, reports)
}

/// Applies the duplicate policy and freezes the catalog.
fn finish(catalog: &Catalog, reports: Vec<ModuleReport>) -> Result<BootstrapReport, CatalogError> {
    let mut report = BootstrapReport {
        modules: reports,
        entries: 0,
    };
    let count = report.duplicate_count();
    if count > 0 && catalog.options().duplicate_policy == DuplicatePolicy::Reject {
        tracing::error!(duplicates = count, "duplicate message registrations rejected");
        return Err(CatalogError::DuplicatesRejected {
            count,
        });
    }
    report.entries = catalog.freeze().len();
    tracing::info!(
        modules = report.modules.len(),
        entries = report.entries,
        unchanged = report.unchanged(),
        duplicates = count,
        "message catalog frozen"
    );
    Ok(report)
}
