// crates/message-catalog-core/src/core/definition.rs
// ============================================================================
// Module: Message Definitions
// Description: Compile-time message definitions and the declaration macro.
// Purpose: Let subsystems declare identifiers and templates as constants.
// Dependencies: crate::core::{identifiers, template}
// ============================================================================

//! ## Overview
//! Subsystems declare their messages with [`define_messages!`](crate::define_messages),
//! which emits one [`MessageDef`] constant per message plus a table listing
//! them in declaration order. The table is what a module's registration
//! routine hands to the catalog at bootstrap.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::Category;
use crate::core::identifiers::MessageId;
use crate::core::identifiers::Ordinal;
use crate::core::identifiers::Severity;
use crate::core::template::ArgKind;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A compiled-in message definition.
///
/// # Invariants
/// - `signature`, when present, must equal the template's placeholder kinds;
///   the catalog rejects the definition at registration otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDef {
    /// Stable identifier.
    id: MessageId,
    /// Template source text.
    template: &'static str,
    /// Declared argument kinds, in order.
    signature: Option<&'static [ArgKind]>,
}

impl MessageDef {
    /// Creates a definition without a declared signature.
    #[must_use]
    pub const fn new(
        category: Category,
        severity: Severity,
        ordinal: Ordinal,
        template: &'static str,
    ) -> Self {
        Self {
            id: MessageId::new(category, severity, ordinal),
            template,
            signature: None,
        }
    }

    /// Declares the argument kinds the template must consume.
    #[must_use]
    pub const fn with_signature(mut self, signature: &'static [ArgKind]) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the template source text.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Returns the declared signature, if any.
    #[must_use]
    pub const fn signature(&self) -> Option<&'static [ArgKind]> {
        self.signature
    }
}

impl From<MessageDef> for MessageId {
    fn from(def: MessageDef) -> Self {
        def.id
    }
}

impl From<&MessageDef> for MessageId {
    fn from(def: &MessageDef) -> Self {
        def.id
    }
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Declares message definitions for one category.
///
/// Each entry names its severity and ordinal, an optional argument signature
/// in brackets, and the template. Ordinals are `u16` literals, so an ordinal
/// that does not fit the ordinal field fails to compile.
///
/// ```ignore
/// define_messages! {
///     category: Core;
///     table: CORE_MESSAGES;
///
///     /// Abandon requests may not themselves be canceled.
///     pub const CORE_CANNOT_CANCEL_ABANDON: MildError(1) =
///         "Abandon requests cannot be canceled";
///     /// Remaining lifetime of a cancellable item.
///     pub const CORE_TIME_TO_EXPIRATION: Informational(999) [String] =
///         "Time to expiration: %s";
/// }
/// ```
#[macro_export]
macro_rules! define_messages {
    (
        category: $category:ident;
        table: $table:ident;
        $(
            $(#[$meta:meta])*
            $vis:vis const $name:ident : $severity:ident ( $ordinal:literal )
                $( [ $( $kind:ident ),* $(,)? ] )? = $template:expr;
        )*
    ) => {
        $(
            $(#[$meta])*
            $vis const $name: $crate::MessageDef = $crate::MessageDef::new(
                $crate::Category::$category,
                $crate::Severity::$severity,
                $crate::Ordinal::from_u16($ordinal),
                $template,
            )
            $( .with_signature(&[ $( $crate::ArgKind::$kind ),* ]) )?;
        )*

        /// Definitions declared in this block, in declaration order.
        pub const $table: &[$crate::MessageDef] = &[ $( $name ),* ];
    };
}
