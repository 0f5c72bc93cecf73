// crates/message-catalog-core/src/runtime/registry.rs
// ============================================================================
// Module: Catalog Registry Table
// Description: Ordered map from message identifiers to templates.
// Purpose: Apply the registration policy independent of synchronization.
// Dependencies: crate::core, serde, thiserror
// ============================================================================

//! ## Overview
//! [`CatalogTable`] is the plain data behind a [`Catalog`](crate::Catalog). It
//! can be built and inspected on its own, which keeps the registration policy
//! testable without any shared state.
//!
//! ## Invariants
//! - An identifier maps to at most one template.
//! - The first template registered for an identifier is never replaced.
//! - Iteration is ordered by packed identifier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::core::ArgKind;
use crate::core::Category;
use crate::core::CodecError;
use crate::core::MessageDef;
use crate::core::MessageId;
use crate::core::Ordinal;
use crate::core::Severity;
use crate::core::Template;
use crate::core::TemplateError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by catalog registration and lookup.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Identifier composition failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// Template text could not be parsed.
    #[error("invalid template for message {id}: {source}")]
    InvalidTemplate {
        /// Identifier being registered.
        id: MessageId,
        /// Parse failure.
        source: TemplateError,
    },
    /// Declared argument kinds disagree with the template's placeholders.
    #[error("message {id} declares arguments [{declared}] but its template takes [{actual}]")]
    SignatureMismatch {
        /// Identifier being registered.
        id: MessageId,
        /// Declared kinds, comma separated.
        declared: String,
        /// Kinds found in the template, comma separated.
        actual: String,
    },
    /// The identifier already maps to a different template.
    #[error("message {id} already registered with a different template")]
    DuplicateRegistration {
        /// Identifier being registered.
        id: MessageId,
        /// Template kept in the catalog.
        existing: String,
        /// Template that was refused.
        rejected: String,
    },
    /// Bootstrap refused to freeze a catalog that saw duplicate registrations.
    #[error("{count} duplicate message registrations rejected")]
    DuplicatesRejected {
        /// Number of conflicting registrations.
        count: usize,
    },
    /// The catalog is frozen and does not accept late registrations.
    #[error("catalog is frozen; message {id} was not registered")]
    Frozen {
        /// Identifier being registered.
        id: MessageId,
    },
    /// No template is registered for the identifier.
    #[error("unknown message id {0}")]
    UnknownMessageId(MessageId),
}

// ============================================================================
// SECTION: Registration Outcome
// ============================================================================

/// Successful registration outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new entry was added.
    Inserted,
    /// The identical template was already registered.
    Unchanged,
}

/// One catalog entry, as exposed to enumeration tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Packed identifier.
    pub id: MessageId,
    /// Category field.
    pub category: Category,
    /// Severity field.
    pub severity: Severity,
    /// Ordinal field.
    pub ordinal: Ordinal,
    /// Registered template.
    pub template: Template,
}

impl CatalogEntry {
    /// Builds an entry from an identifier and its template.
    #[must_use]
    pub fn new(id: MessageId, template: Template) -> Self {
        Self {
            id,
            category: id.category(),
            severity: id.severity(),
            ordinal: id.ordinal(),
            template,
        }
    }
}

// ============================================================================
// SECTION: Table
// ============================================================================

/// Ordered identifier-to-template map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogTable {
    /// Registered templates keyed by identifier.
    entries: BTreeMap<MessageId, Template>,
}

impl CatalogTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a parsed template.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateRegistration`] when `id` already maps
    /// to a different template. The existing template is kept.
    pub fn register(
        &mut self,
        id: MessageId,
        template: Template,
    ) -> Result<Registration, CatalogError> {
        match self.entries.get(&id) {
            None => {
                self.entries.insert(id, template);
                Ok(Registration::Inserted)
            }
            Some(existing) if *existing == template => Ok(Registration::Unchanged),
            Some(existing) => Err(CatalogError::DuplicateRegistration {
                id,
                existing: existing.as_str().to_string(),
                rejected: template.as_str().to_string(),
            }),
        }
    }

    /// Parses and registers template text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidTemplate`] when the text does not parse,
    /// or the errors of [`register`](Self::register).
    pub fn register_text(
        &mut self,
        id: MessageId,
        template: &str,
    ) -> Result<Registration, CatalogError> {
        let template = parse_template(id, template)?;
        self.register(id, template)
    }

    /// Registers a compiled-in definition after checking its signature.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidTemplate`],
    /// [`CatalogError::SignatureMismatch`], or the errors of
    /// [`register`](Self::register).
    pub fn register_definition(&mut self, def: &MessageDef) -> Result<Registration, CatalogError> {
        let template = prepare_definition(def)?;
        self.register(def.id(), template)
    }

    /// Returns the template registered for `id`.
    #[must_use]
    pub fn lookup(&self, id: MessageId) -> Option<&Template> {
        self.entries.get(&id)
    }

    /// Returns true when `id` has a template.
    #[must_use]
    pub fn is_registered(&self, id: MessageId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (MessageId, &Template)> {
        self.entries.iter().map(|(id, template)| (*id, template))
    }

    /// Collects entries in identifier order.
    #[must_use]
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.iter().map(|(id, template)| CatalogEntry::new(id, template.clone())).collect()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses template text, attributing failures to `id`.
pub(crate) fn parse_template(id: MessageId, text: &str) -> Result<Template, CatalogError> {
    Template::parse(text).map_err(|source| CatalogError::InvalidTemplate {
        id,
        source,
    })
}

/// Parses a definition's template and checks its declared signature.
pub(crate) fn prepare_definition(def: &MessageDef) -> Result<Template, CatalogError> {
    let template = parse_template(def.id(), def.template())?;
    if let Some(declared) = def.signature() {
        let actual = template.signature();
        if declared != actual.as_slice() {
            return Err(CatalogError::SignatureMismatch {
                id: def.id(),
                declared: join_kinds(declared),
                actual: join_kinds(&actual),
            });
        }
    }
    Ok(template)
}

/// Renders argument kinds as a comma-separated list.
fn join_kinds(kinds: &[ArgKind]) -> String {
    kinds.iter().map(|kind| kind.as_str()).collect::<Vec<_>>().join(", ")
}
