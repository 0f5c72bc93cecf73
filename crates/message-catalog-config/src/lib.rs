// crates/message-catalog-config/src/lib.rs
// ============================================================================
// Module: Message Catalog Config Library
// Description: Canonical catalog config model and validation.
// Purpose: Single source of truth for message-catalog.toml semantics.
// Dependencies: message-catalog-core, serde, toml
// ============================================================================

//! ## Overview
//! `message-catalog-config` defines the configuration model for the message
//! catalog: how duplicate registrations are treated at bootstrap, whether the
//! frozen catalog accepts late registrations, and how degraded format inputs
//! render. Validation is strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
