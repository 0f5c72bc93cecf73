// crates/message-catalog-core/src/core/mod.rs
// ============================================================================
// Module: Message Catalog Core Types
// Description: Identifiers, templates, arguments, and message definitions.
// Purpose: Provide the stable value types shared by the registry and formatter.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types are pure values with no process-wide state. They define how an
//! identifier is packed, how a template is parsed, and how arguments are
//! tagged.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod args;
pub mod definition;
pub mod identifiers;
pub mod template;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use args::MessageArg;
pub use definition::MessageDef;
pub use identifiers::CATEGORY_MASK;
pub use identifiers::CATEGORY_SHIFT;
pub use identifiers::Category;
pub use identifiers::CodecError;
pub use identifiers::CodecField;
pub use identifiers::MAX_ORDINAL;
pub use identifiers::MessageId;
pub use identifiers::ORDINAL_MASK;
pub use identifiers::Ordinal;
pub use identifiers::SEVERITY_MASK;
pub use identifiers::SEVERITY_SHIFT;
pub use identifiers::Severity;
pub use identifiers::compose;
pub use identifiers::compose_codes;
pub use identifiers::decompose;
pub use template::ArgKind;
pub use template::Conversion;
pub use template::Placeholder;
pub use template::Segment;
pub use template::Template;
pub use template::TemplateError;
