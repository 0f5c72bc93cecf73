// crates/directory-server-messages/src/messages/protocol.rs
// ============================================================================
// Module: Protocol Messages
// Description: ASN.1 decoding and request control messages.
// Purpose: Declare protocol-category identifiers and templates.
// Dependencies: message-catalog-core
// ============================================================================

//! ## Overview
//! Messages produced while decoding ASN.1 elements. The proxied authorization
//! V2 identity mapper message is declared here as well as in
//! [`proxied_auth`](crate::messages::proxied_auth); both declarations carry
//! the same template, so registration keeps a single entry.

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
    table: PROTOCOL_MESSAGES;

    /// Element byte array was null.
    pub const ASN1_NULL_ELEMENT: MildError(1) =
        "Cannot decode the provided byte array as an ASN.1 element because the array was null.";
    /// Element byte array shorter than two bytes.
    pub const ASN1_SHORT_ELEMENT: MildError(2) [Integer] =
        "Cannot decode the provided byte array as an ASN.1 element because the length of the \
         array (%d bytes) is less than the minimum required for an ASN.1 element (2 bytes).";
    /// Multi-byte length with an unsupported number of bytes.
    pub const ASN1_INVALID_NUM_LENGTH_BYTES: MildError(3) [Integer] =
        "Cannot decode the provided byte array as an ASN.1 element because it contained a \
         multi-byte length with an invalid number of bytes (%d).";
    /// Multi-byte length cut off by the end of the array.
    pub const ASN1_TRUNCATED_LENGTH: MildError(4) [Integer] =
        "Cannot decode the provided byte array as an ASN.1 element because it contained a \
         multi-byte length of %d bytes but the array was too short to contain the entire length.";
    /// Declared value length disagrees with the bytes remaining.
    pub const ASN1_LENGTH_MISMATCH: MildError(5) [Integer, Integer] =
        "Cannot decode the provided byte array as an ASN.1 element because the decoded value \
         length (%d bytes) does not equal the number of bytes remaining in the provided array \
         (%d).";
    /// Element set byte array was null.
    pub const ASN1_ELEMENT_SET_NULL: MildError(6) =
        "Cannot decode the provided byte array as a set of ASN.1 elements because the array was \
         null.";
    /// Element set ended after a BER type.
    pub const ASN1_ELEMENT_SET_NO_LENGTH: MildError(7) =
        "Cannot decode the provided byte array as a set of ASN.1 elements because the end of the \
         array was reached after having read the BER type but none of the value for an element.";
    /// Element set multi-byte length with an unsupported number of bytes.
    pub const ASN1_ELEMENT_SET_INVALID_NUM_LENGTH_BYTES: MildError(8) [Integer] =
        "Cannot decode the provided byte array as a set of ASN.1 elements because it contained a \
         multi-byte length with an invalid number of bytes (%d).";
    /// Username authorization ID without an identity mapper.
    pub const PROXYAUTH2_NO_IDENTITY_MAPPER: MildError(299) =
        "Unable to process proxied authorization V2 control because it contains an \
         authorization ID based on a username and no proxied authorization identity mapper is \
         configured in the Directory Server.";
}

/// Protocol message module.
pub const MODULE: StaticModule = StaticModule::new("protocol", PROTOCOL_MESSAGES);
