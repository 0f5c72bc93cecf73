// crates/directory-server-messages/src/messages/core.rs
// ============================================================================
// Module: Core Messages
// Description: Messages raised by core server operation processing.
// Purpose: Declare core-category identifiers and templates.
// Dependencies: message-catalog-core
// ============================================================================

//! ## Overview
//! Core operation messages. Ordinals are fixed; never renumber them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use message_catalog_core::StaticModule;
use message_catalog_core::define_messages;

// ============================================================================
// SECTION: Definitions
// ============================================================================

define_messages! {
    category: Core;
    table: CORE_MESSAGES;

    /// An abandon request was itself the target of a cancel request.
    pub const CORE_CANNOT_CANCEL_ABANDON: MildError(1) =
        "Abandon requests cannot be canceled";
    /// Remaining lifetime of a cancellable item; the argument is preformatted.
    pub const CORE_TIME_TO_EXPIRATION: Informational(999) [String] =
        "Time to expiration: %s";
}

/// Core message module.
pub const MODULE: StaticModule = StaticModule::new("core", CORE_MESSAGES);
