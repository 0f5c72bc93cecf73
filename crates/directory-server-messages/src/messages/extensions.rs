// crates/directory-server-messages/src/messages/extensions.rs
// ============================================================================
// Module: Extension Messages
// Description: Entry cache configuration change messages.
// Purpose: Declare extensions-category identifiers and templates.
// Dependencies: message-catalog-core
// ============================================================================

//! ## Overview
//! Messages emitted when the FIFO and soft-reference entry caches apply a
//! configuration change.

// ============================================================================
// SECTION: Imports
// ============================================================================

use message_catalog_core::StaticModule;
use message_catalog_core::define_messages;

// ============================================================================
// SECTION: Definitions
// ============================================================================

define_messages! {
    category: Extensions;
    table: EXTENSIONS_MESSAGES;

    /// FIFO cache memory ceiling changed.
    pub const FIFOCACHE_UPDATED_MAX_MEMORY_PCT: Informational(27) [Integer, Integer] =
        "The amount of memory that may be used for the entry cache has been updated to %d \
         percent of the total memory available to the JVM, or approximately %d bytes.  If this \
         percentage has been reduced, it may take some time for entries to be purged so that the \
         current cache memory consumption can reflect this new setting.";
    /// FIFO cache entry ceiling changed.
    pub const FIFOCACHE_UPDATED_MAX_ENTRIES: Informational(28) [Integer] =
        "The number of entries that may be held in the entry cache has been updated to %d.  If \
         this value has been reduced, it may take some time for entries to be purged so that the \
         cache can reflect this new setting.";
    /// FIFO cache include filters changed.
    pub const FIFOCACHE_UPDATED_INCLUDE_FILTERS: Informational(30) =
        "The set of search filters that will control which entries may be included in the cache \
         has been updated.";
    /// FIFO cache exclude filters changed.
    pub const FIFOCACHE_UPDATED_EXCLUDE_FILTERS: Informational(31) =
        "The set of search filters that will control which entries should be be excluded from \
         the cache has been updated.";
    /// Soft-reference cache lock timeout changed.
    pub const SOFTREFCACHE_UPDATED_LOCK_TIMEOUT: Informational(293) [Integer] =
        "The lock timeout that will be used to determine the length of time that the cache \
         should block while attempting to acquire a lock for an entry has been set to %d \
         milliseconds.";
    /// Soft-reference cache include filters changed.
    pub const SOFTREFCACHE_UPDATED_INCLUDE_FILTERS: Informational(294) =
        "The set of search filters that will control which entries may be included in the cache \
         has been updated.";
    /// Soft-reference cache exclude filters changed.
    pub const SOFTREFCACHE_UPDATED_EXCLUDE_FILTERS: Informational(295) =
        "The set of search filters that will control which entries should be be excluded from \
         the cache has been updated.";
}

/// Extensions message module.
pub const MODULE: StaticModule = StaticModule::new("extensions", EXTENSIONS_MESSAGES);
