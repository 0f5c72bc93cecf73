// crates/directory-server-messages/src/messages/mod.rs
// ============================================================================
// Module: Directory Server Message Modules
// Description: Per-subsystem message declarations.
// Purpose: Group compiled-in message modules and their registration order.
// Dependencies: message-catalog-core
// ============================================================================

//! ## Overview
//! One submodule per subsystem. Each declares its messages with
//! `define_messages!` and exposes a
//! [`StaticModule`](message_catalog_core::StaticModule) named `MODULE`.
//!
//! ## Invariants
//! - Registration order is [`MODULES`] order; the first template registered
//!   for an id is the one kept.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod extensions;
pub mod jeb;
pub mod plugin;
pub mod protocol;
pub mod proxied_auth;

// ============================================================================
// SECTION: Imports
// ============================================================================

use message_catalog_core::MessageModule;

// ============================================================================
// SECTION: Registration Order
// ============================================================================

/// Every compiled-in module, in registration order.
pub static MODULES: &[&dyn MessageModule] = &[
    &self::core::MODULE,
    &protocol::MODULE,
    &proxied_auth::MODULE,
    &extensions::MODULE,
    &plugin::MODULE,
    &jeb::MODULE,
];
