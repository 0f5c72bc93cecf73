// crates/directory-server-messages/src/messages/proxied_auth.rs
// ============================================================================
// Module: Proxied Authorization Messages
// Description: Messages for the proxied authorization V1 and V2 controls.
// Purpose: Declare control validation identifiers and templates.
// Dependencies: message-catalog-core
// ============================================================================

//! ## Overview
//! Proxied authorization messages live in the protocol category alongside the
//! ASN.1 messages, in their own ordinal ranges.

// ============================================================================
// SECTION: Imports
// ============================================================================

use message_catalog_core::StaticModule;
use message_catalog_core::define_messages;

// ============================================================================
// SECTION: Definitions
// ============================================================================

define_messages! {
    category: Protocol;
    table: PROXIED_AUTH_MESSAGES;

    /// V1 control value failed to decode.
    pub const PROXYAUTH1_CANNOT_DECODE_VALUE: MildError(295) [String] =
        "Cannot decode the provided proxied authorization V1 control because an error occurred \
         while attempting to decode the control value:  %s.";
    /// V1 control names a user that does not exist.
    pub const PROXYAUTH1_NO_SUCH_USER: MildError(296) [String] =
        "User %s specified in the proxied authorization V1 control does not exist in the \
         Directory Server.";
    /// V2 control has no value.
    pub const PROXYAUTH2_NO_CONTROL_VALUE: MildError(297) =
        "Cannot decode the provided proxied authorization V2 control because it does not have a \
         value.";
    /// V2 control value failed to decode.
    pub const PROXYAUTH2_CANNOT_DECODE_VALUE: MildError(298) [String] =
        "Cannot decode the provided proxied authorization V2 control because an error occurred \
         while attempting to decode the control value:  %s.";
    /// Username authorization ID without an identity mapper.
    pub const PROXYAUTH2_NO_IDENTITY_MAPPER: MildError(299) =
        "Unable to process proxied authorization V2 control because it contains an \
         authorization ID based on a username and no proxied authorization identity mapper is \
         configured in the Directory Server.";
    /// V2 authorization ID has neither a `dn:` nor a `u:` prefix.
    pub const PROXYAUTH2_INVALID_AUTHZID: MildError(300) [String] =
        "The authorization ID \"%s\" contained in the proxied authorization V2 control is invalid \
         because it does not start with \"dn:\" to indicate a user DN or \"u:\" to indicate a \
         username.";
    /// V2 control names a user that does not exist.
    pub const PROXYAUTH2_NO_SUCH_USER: MildError(301) [String] =
        "User %s specified in the proxied authorization V2 control does not exist in the \
         Directory Server.";
    /// V1 target entry could not be locked.
    pub const PROXYAUTH1_CANNOT_LOCK_USER: MildError(371) [String] =
        "Unable to obtain a lock on user entry %s for the proxied authorization V1 control \
         validation.";
    /// V1 target account is disabled by password policy.
    pub const PROXYAUTH1_UNUSABLE_ACCOUNT: MildError(372) [String] =
        "Use of the proxied authorization V1 control for user %s is not allowed by the password \
         policy configuration.";
    /// V2 target entry could not be locked.
    pub const PROXYAUTH2_CANNOT_LOCK_USER: MildError(373) [String] =
        "Unable to obtain a lock on user entry %s for the proxied authorization V2 control \
         validation.";
    /// V2 target account is disabled by password policy.
    pub const PROXYAUTH2_UNUSABLE_ACCOUNT: MildError(374) [String] =
        "Use of the proxied authorization V2 control for user %s is not allowed by the password \
         policy configuration.";
}

/// Proxied authorization message module.
pub const MODULE: StaticModule = StaticModule::new("proxied-auth", PROXIED_AUTH_MESSAGES);
