// crates/message-catalog-core/src/runtime/catalog.rs
// ============================================================================
// Module: Message Catalog
// Description: Thread-safe catalog with bootstrap and frozen phases.
// Purpose: Serialize bootstrap writes and serve lock-free reads afterwards.
// Dependencies: arc-swap, parking_lot, tracing, crate::runtime::{registry, formatter}
// ============================================================================

//! ## Overview
//! A [`Catalog`] starts in [`CatalogPhase::Bootstrap`], where every write and
//! read goes through a single writer lock around the staging table.
//! [`Catalog::freeze`] moves the table into an atomically published snapshot;
//! from then on lookups and formatting are lock-free loads.
//!
//! Late registration after the freeze is refused unless
//! [`CatalogOptions::allow_late_registration`] is set, in which case the
//! snapshot is copied, extended, and republished under the writer lock.
//!
//! ## Invariants
//! - Readers observe either the previous or the next snapshot, never a
//!   partially updated table.
//! - The first template registered for an identifier is never replaced.
//! - Formatting never fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;

use crate::core::MessageArg;
use crate::core::MessageDef;
use crate::core::MessageId;
use crate::core::Template;
use crate::runtime::formatter::ArgMismatch;
use crate::runtime::formatter::FormatOptions;
use crate::runtime::formatter::check_arguments;
use crate::runtime::formatter::render;
use crate::runtime::formatter::render_unknown;
use crate::runtime::registry::CatalogEntry;
use crate::runtime::registry::CatalogError;
use crate::runtime::registry::CatalogTable;
use crate::runtime::registry::Registration;
use crate::runtime::registry::parse_template;
use crate::runtime::registry::prepare_definition;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Handling of conflicting registrations at bootstrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the first template, log the conflict, and continue.
    #[default]
    Report,
    /// Keep the first template, then fail bootstrap.
    Reject,
}

/// Catalog behavior settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Handling of conflicting registrations at bootstrap.
    pub duplicate_policy: DuplicatePolicy,
    /// Accept registrations after the catalog is frozen.
    pub allow_late_registration: bool,
    /// Formatting behavior for degraded inputs.
    pub format: FormatOptions,
}

/// Catalog lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    /// Accepting registrations.
    Bootstrap,
    /// Read-only snapshot published.
    Frozen,
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Process-wide message catalog.
pub struct Catalog {
    /// Writer lock; owns the table until the catalog is frozen.
    staging: Mutex<CatalogTable>,
    /// Published snapshot; `None` while bootstrapping.
    published: ArcSwapOption<CatalogTable>,
    /// Behavior settings.
    options: CatalogOptions,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogOptions::default())
    }
}

impl Catalog {
    /// Creates an empty catalog in the bootstrap phase.
    #[must_use]
    pub fn new(options: CatalogOptions) -> Self {
        Self {
            staging: Mutex::new(CatalogTable::new()),
            published: ArcSwapOption::empty(),
            options,
        }
    }

    /// Creates an already frozen catalog from a prepared table.
    #[must_use]
    pub fn from_table(table: CatalogTable, options: CatalogOptions) -> Self {
        Self {
            staging: Mutex::new(CatalogTable::new()),
            published: ArcSwapOption::from_pointee(table),
            options,
        }
    }

    /// Returns the behavior settings.
    #[must_use]
    pub const fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> CatalogPhase {
        if self.published.load().is_some() {
            CatalogPhase::Frozen
        } else {
            CatalogPhase::Bootstrap
        }
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Registers template text for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidTemplate`] for unparseable text,
    /// [`CatalogError::DuplicateRegistration`] when `id` maps to a different
    /// template (the existing one is kept), or [`CatalogError::Frozen`] after
    /// the freeze when late registration is disabled.
    pub fn register(&self, id: MessageId, template: &str) -> Result<Registration, CatalogError> {
        let template = parse_template(id, template)?;
        self.insert(id, template)
    }

    /// Registers a compiled-in definition, checking its declared signature.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`register`](Self::register) and
    /// [`CatalogError::SignatureMismatch`].
    pub fn register_definition(&self, def: &MessageDef) -> Result<Registration, CatalogError> {
        let template = prepare_definition(def)?;
        self.insert(def.id(), template)
    }

    /// Inserts a parsed template according to the current phase.
    fn insert(&self, id: MessageId, template: Template) -> Result<Registration, CatalogError> {
        let mut staging = self.staging.lock();
        let Some(snapshot) = self.published.load_full() else {
            return staging.register(id, template);
        };
        if !self.options.allow_late_registration {
            return Err(CatalogError::Frozen {
                id,
            });
        }
        if let Some(existing) = snapshot.lookup(id) {
            if *existing == template {
                return Ok(Registration::Unchanged);
            }
            return Err(CatalogError::DuplicateRegistration {
                id,
                existing: existing.as_str().to_string(),
                rejected: template.as_str().to_string(),
            });
        }
        let mut next = CatalogTable::clone(&snapshot);
        let outcome = next.register(id, template)?;
        self.published.store(Some(Arc::new(next)));
        drop(staging);
        tracing::debug!(message_id = id.raw(), "late message registration published");
        Ok(outcome)
    }

    /// Publishes the staged table and ends the bootstrap phase.
    ///
    /// Returns the published snapshot. Calling this on a frozen catalog
    /// returns the current snapshot unchanged.
    pub fn freeze(&self) -> Arc<CatalogTable> {
        let mut staging = self.staging.lock();
        if let Some(snapshot) = self.published.load_full() {
            return snapshot;
        }
        let snapshot = Arc::new(std::mem::take(&mut *staging));
        self.published.store(Some(Arc::clone(&snapshot)));
        snapshot
    }

    // ------------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------------

    /// Runs `read` against the current table.
    fn with_table<R>(&self, read: impl FnOnce(&CatalogTable) -> R) -> R {
        if let Some(snapshot) = self.published.load().as_ref() {
            return read(snapshot.as_ref());
        }
        let staging = self.staging.lock();
        // The catalog may have been frozen while waiting for the lock.
        if let Some(snapshot) = self.published.load().as_ref() {
            return read(snapshot.as_ref());
        }
        read(&*staging)
    }

    /// Returns the template registered for `id`.
    #[must_use]
    pub fn lookup(&self, id: MessageId) -> Option<Template> {
        self.with_table(|table| table.lookup(id).cloned())
    }

    /// Returns the template registered for `id`, or an error naming it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownMessageId`] when nothing is registered.
    pub fn try_lookup(&self, id: MessageId) -> Result<Template, CatalogError> {
        self.lookup(id).ok_or(CatalogError::UnknownMessageId(id))
    }

    /// Returns true when `id` has a template.
    #[must_use]
    pub fn is_registered(&self, id: MessageId) -> bool {
        self.with_table(|table| table.is_registered(id))
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.with_table(CatalogTable::len)
    }

    /// Returns true when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with_table(CatalogTable::is_empty)
    }

    /// Returns every entry in identifier order.
    ///
    /// Each call takes a fresh snapshot, so the result can be re-requested and
    /// always reflects a consistent table.
    #[must_use]
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.with_table(CatalogTable::entries)
    }

    /// Returns a shared snapshot of the current table.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogTable> {
        if let Some(snapshot) = self.published.load_full() {
            return snapshot;
        }
        self.with_table(|table| Arc::new(table.clone()))
    }

    // ------------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------------

    /// Formats the message `id` with positional `args`.
    ///
    /// Unknown identifiers produce a fallback naming the identifier's decimal
    /// value; this method never fails.
    #[must_use]
    pub fn format(&self, id: impl Into<MessageId>, args: &[MessageArg]) -> String {
        let id = id.into();
        match self.lookup(id) {
            Some(template) => render(id, &template, args, &self.options.format),
            None => {
                tracing::debug!(
                    message_id = id.raw(),
                    category = %id.category(),
                    severity = %id.severity(),
                    "formatting unregistered message id"
                );
                render_unknown(id, args)
            }
        }
    }

    /// Checks `args` against the template registered for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownMessageId`] when nothing is registered.
    pub fn check_arguments(
        &self,
        id: impl Into<MessageId>,
        args: &[MessageArg],
    ) -> Result<Vec<ArgMismatch>, CatalogError> {
        let template = self.try_lookup(id.into())?;
        Ok(check_arguments(&template, args))
    }
}
