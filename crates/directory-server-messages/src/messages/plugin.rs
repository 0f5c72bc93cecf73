// crates/directory-server-messages/src/messages/plugin.rs
// ============================================================================
// Module: Plugin Messages
// Description: Profiler plugin lifecycle and configuration messages.
// Purpose: Declare plugin-category identifiers and templates.
// Dependencies: message-catalog-core
// ============================================================================

//! ## Overview
//! Profiler plugin messages. The first argument of each is the DN of the
//! plugin's configuration entry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use message_catalog_core::StaticModule;
use message_catalog_core::define_messages;

// ============================================================================
// SECTION: Definitions
// ============================================================================

define_messages! {
    category: Plugin;
    table: PLUGIN_MESSAGES;

    /// Profiler configured without plugin types.
    pub const PLUGIN_PROFILER_NO_PLUGIN_TYPES: SevereError(5) [String] =
        "The Directory Server profiler plugin instance defined in configuration entry %s does \
         not list any plugin types.  This plugin must be configured to operate as a startup \
         plugin.";
    /// Profiler configured with a non-startup plugin type.
    pub const PLUGIN_PROFILER_INVALID_PLUGIN_TYPE: SevereError(6) [String, String] =
        "The Directory Server profiler plugin instance defined in configuration entry %s lists \
         an invalid plugin type %s.  This plugin may only be used as a startup plugin.";
    /// Captured data could not be written.
    pub const PLUGIN_PROFILER_CANNOT_WRITE_PROFILE_DATA: SevereError(9) [String, String, String] =
        "An unexpected error occurred when the profiler plugin defined in configuration entry %s \
         attempted to write the information captured to output file %s:  %s.";
    /// Sample interval changed.
    pub const PLUGIN_PROFILER_UPDATED_INTERVAL: Informational(18) [String, Integer] =
        "The sample interval for the profiler plugin defined in configuration entry %s has been \
         updated to %d milliseconds.";
    /// Sample interval change failed.
    pub const PLUGIN_PROFILER_CANNOT_UPDATE_INTERVAL: SevereError(19) [String, String] =
        "An unexpected error occurred while attempting to update the sample interval for the \
         profiler plugin defined in configuration entry %s:  %s.";
    /// Profile directory changed.
    pub const PLUGIN_PROFILER_UPDATED_DIRECTORY: Informational(20) [String, String] =
        "The profile directory for the profiler plugin defined in configuration entry %s has \
         been changed to %s.";
    /// Profile directory change failed.
    pub const PLUGIN_PROFILER_CANNOT_UPDATE_DIRECTORY: SevereError(21) [String, String] =
        "An unexpected error occurred while attempting to update the profile directory for the \
         profiler plugin defined in configuration entry %s:  %s.";
    /// Profiling started.
    pub const PLUGIN_PROFILER_STARTED_PROFILING: Informational(22) [String] =
        "The profiler plugin defined in configuration entry %s has been activated and has \
         started capturing data.";
    /// Start requested while already profiling.
    pub const PLUGIN_PROFILER_ALREADY_PROFILING: Informational(23) [String] =
        "The profiler plugin defined in configuration entry %s is already active, and therefore \
         the request to start profiling has been ignored.";
    /// Stop requested while idle.
    pub const PLUGIN_PROFILER_NOT_RUNNING: Informational(24) [String] =
        "The profiler plugin defined in configuration entry %s received a request to stop \
         capturing data but it was not active so no action has been taken.";
    /// Profiling stopped.
    pub const PLUGIN_PROFILER_STOPPED_PROFILING: Informational(25) [String] =
        "The profiler plugin defined in configuration entry %s has been stopped and is no longer \
         capturing data.";
    /// Captured data written.
    pub const PLUGIN_PROFILER_WROTE_PROFILE_DATA: Informational(26) [String, String] =
        "The data collected by the profiler plugin defined in configuration entry %s has been \
         written to %s.";
}

/// Plugin message module.
pub const MODULE: StaticModule = StaticModule::new("plugin", PLUGIN_MESSAGES);
