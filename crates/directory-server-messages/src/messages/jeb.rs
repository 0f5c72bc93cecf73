// crates/directory-server-messages/src/messages/jeb.rs
// ============================================================================
// Module: Storage Engine Messages
// Description: Database open, import, verify, and cleaner messages.
// Purpose: Declare storage-engine identifiers and templates.
// Dependencies: message-catalog-core
// ============================================================================

//! ## Overview
//! Storage engine messages, including the periodic import and verify progress
//! reports. Rates are passed as floating-point arguments.

// ============================================================================
// SECTION: Imports
// ============================================================================

use message_catalog_core::StaticModule;
use message_catalog_core::define_messages;

// ============================================================================
// SECTION: Definitions
// ============================================================================

define_messages! {
    category: Jeb;
    table: JEB_MESSAGES;

    /// Database environment failed to open.
    pub const JEB_OPEN_DATABASE_FAIL: SevereError(2) [String] =
        "The database could not be opened: %s";
    /// Cleaner pass started.
    pub const JEB_CLEAN_DATABASE_START: Notice(29) [Integer, String] =
        "Starting database cleaning on %d log file(s) in '%s'";
    /// Entries removed by a subtree delete.
    pub const JEB_DELETED_ENTRY_COUNT: Notice(33) [Integer] =
        "The number of entries deleted was %d";
    /// Import refused to replace an existing entry.
    pub const JEB_IMPORT_ENTRY_EXISTS: SevereWarning(44) =
        "The entry exists and the import options do not allow it to be replaced";
    /// Import buffer size per worker thread.
    pub const JEB_IMPORT_BUFFER_SIZE: Informational(90) [Integer] =
        "Buffer size per thread = %,d";
    /// Import summary.
    pub const JEB_IMPORT_FINAL_STATUS: Informational(94)
        [Integer, Integer, Integer, Integer, Integer, Decimal] =
        "Processed %d entries, imported %d, skipped %d, and rejected %d in %d seconds (average \
         rate %.1f/sec)";
    /// Periodic import progress.
    pub const JEB_IMPORT_PROGRESS_REPORT: Informational(96) [Integer, Integer, Integer, Decimal] =
        "Processed %d entries, skipped %d, and rejected %d (recent rate %.1f/sec)";
    /// Periodic import memory report.
    pub const JEB_IMPORT_CACHE_AND_MEMORY_REPORT: Informational(97) [Integer, Decimal] =
        "Free memory = %d MB, Cache miss rate = %.1f/entry";
    /// Verify reference statistics.
    pub const JEB_VERIFY_AVERAGE_REFERENCE_COUNT: Informational(104) [Decimal] =
        "Average number of entries referenced is %.2f/record";
    /// Verify summary.
    pub const JEB_VERIFY_FINAL_STATUS: Informational(106) [Integer, Integer, Integer, Decimal] =
        "Checked %d entries and found %d error(s) in %d seconds (average rate %.1f/sec)";
}

/// Storage engine message module.
pub const MODULE: StaticModule = StaticModule::new("jeb", JEB_MESSAGES);
