// crates/message-catalog-core/src/core/identifiers.rs
// ============================================================================
// Module: Message Identifiers
// Description: Category, severity, ordinal, and packed message identifiers.
// Purpose: Compose and decompose stable 32-bit message identifiers.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`MessageId`] packs three disjoint bit-fields into a single `u32`:
//!
//! | Field | Bits | Mask |
//! | --- | --- | --- |
//! | [`Category`] | 20..=31 | [`CATEGORY_MASK`] |
//! | [`Severity`] | 16..=19 | [`SEVERITY_MASK`] |
//! | [`Ordinal`] | 0..=15 | [`ORDINAL_MASK`] |
//!
//! The packed value is written to logs and alert notifications, so it is the
//! stable external identity of a message. In code the identifier is carried as
//! its typed parts so call sites can match on category and severity without
//! masking.
//!
//! ## Invariants
//! - [`compose`] and [`decompose`] are exact inverses for every valid input.
//! - The packed value of a definition never changes once released.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Bit offset of the category field.
pub const CATEGORY_SHIFT: u32 = 20;
/// Bit offset of the severity field.
pub const SEVERITY_SHIFT: u32 = 16;
/// Mask selecting the category field of a packed identifier.
pub const CATEGORY_MASK: u32 = 0xFFF0_0000;
/// Mask selecting the severity field of a packed identifier.
pub const SEVERITY_MASK: u32 = 0x000F_0000;
/// Mask selecting the ordinal field of a packed identifier.
pub const ORDINAL_MASK: u32 = 0x0000_FFFF;
/// Largest ordinal that fits the ordinal field.
pub const MAX_ORDINAL: u32 = ORDINAL_MASK;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Identifier field named in codec errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecField {
    /// Category bit-field.
    Category,
    /// Severity bit-field.
    Severity,
    /// Ordinal bit-field.
    Ordinal,
}

impl fmt::Display for CodecField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Category => "category",
            Self::Severity => "severity",
            Self::Ordinal => "ordinal",
        })
    }
}

/// Errors raised while composing or parsing identifiers.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A category or severity code is not a member of its enumerated set.
    #[error("invalid {field} code {value:#x}")]
    InvalidField {
        /// Field that failed validation.
        field: CodecField,
        /// Offending raw code.
        value: u32,
    },
    /// A value does not fit its reserved bit-width.
    #[error("{field} {value} exceeds maximum {max}")]
    Range {
        /// Field that failed validation.
        field: CodecField,
        /// Offending value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
}

// ============================================================================
// SECTION: Category
// ============================================================================

/// Subsystem classification stored in the high-order bits of a [`MessageId`].
///
/// # Invariants
/// - Codes are stable; adding a category never renumbers an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Core server processing.
    Core,
    /// Server extensions.
    Extensions,
    /// Protocol handling.
    Protocol,
    /// Configuration handling.
    Config,
    /// Logger framework.
    Log,
    /// General utilities.
    Util,
    /// Schema elements.
    Schema,
    /// Plugin framework and plugins.
    Plugin,
    /// Storage engine backend.
    Jeb,
    /// Generic backends.
    Backend,
    /// Command-line tools.
    Tools,
    /// Task execution.
    Task,
    /// Access control.
    AccessControl,
    /// Administration framework.
    Admin,
    /// Synchronization and replication.
    Sync,
    /// Version compatibility checks.
    VersionCompat,
    /// Setup tooling.
    QuickSetup,
    /// Administration tooling.
    AdminTool,
    /// Third-party and user-defined components.
    UserDefined,
}

impl Category {
    /// Every category, in ascending code order.
    pub const ALL: &'static [Self] = &[
        Self::Core,
        Self::Extensions,
        Self::Protocol,
        Self::Config,
        Self::Log,
        Self::Util,
        Self::Schema,
        Self::Plugin,
        Self::Jeb,
        Self::Backend,
        Self::Tools,
        Self::Task,
        Self::AccessControl,
        Self::Admin,
        Self::Sync,
        Self::VersionCompat,
        Self::QuickSetup,
        Self::AdminTool,
        Self::UserDefined,
    ];

    /// Returns the code stored in the category field.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Core => 0x000,
            Self::Extensions => 0x001,
            Self::Protocol => 0x002,
            Self::Config => 0x003,
            Self::Log => 0x004,
            Self::Util => 0x005,
            Self::Schema => 0x006,
            Self::Plugin => 0x007,
            Self::Jeb => 0x008,
            Self::Backend => 0x009,
            Self::Tools => 0x00A,
            Self::Task => 0x00B,
            Self::AccessControl => 0x00C,
            Self::Admin => 0x00D,
            Self::Sync => 0x00E,
            Self::VersionCompat => 0x00F,
            Self::QuickSetup => 0x010,
            Self::AdminTool => 0x011,
            Self::UserDefined => 0x7FF,
        }
    }

    /// Resolves a category from its field code.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0x000 => Some(Self::Core),
            0x001 => Some(Self::Extensions),
            0x002 => Some(Self::Protocol),
            0x003 => Some(Self::Config),
            0x004 => Some(Self::Log),
            0x005 => Some(Self::Util),
            0x006 => Some(Self::Schema),
            0x007 => Some(Self::Plugin),
            0x008 => Some(Self::Jeb),
            0x009 => Some(Self::Backend),
            0x00A => Some(Self::Tools),
            0x00B => Some(Self::Task),
            0x00C => Some(Self::AccessControl),
            0x00D => Some(Self::Admin),
            0x00E => Some(Self::Sync),
            0x00F => Some(Self::VersionCompat),
            0x010 => Some(Self::QuickSetup),
            0x011 => Some(Self::AdminTool),
            0x7FF => Some(Self::UserDefined),
            _ => None,
        }
    }

    /// Returns the error-log category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "CORE",
            Self::Extensions => "EXTENSIONS",
            Self::Protocol => "PROTOCOL",
            Self::Config => "CONFIG",
            Self::Log => "LOG",
            Self::Util => "UTIL",
            Self::Schema => "SCHEMA",
            Self::Plugin => "PLUGIN",
            Self::Jeb => "JEB",
            Self::Backend => "BACKEND",
            Self::Tools => "TOOLS",
            Self::Task => "TASK",
            Self::AccessControl => "ACCESS_CONTROL",
            Self::Admin => "ADMIN",
            Self::Sync => "SYNC",
            Self::VersionCompat => "VERSION_COMPAT",
            Self::QuickSetup => "QUICKSETUP",
            Self::AdminTool => "ADMIN_TOOL",
            Self::UserDefined => "USER_DEFINED",
        }
    }

    /// Parses a category name (case-insensitive, `-` accepted for `_`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL.iter().copied().find(|category| category.as_str() == normalized)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Severity
// ============================================================================

/// Importance level stored in the mid-order bits of a [`MessageId`].
///
/// Variants are declared in ascending importance, so the derived ordering is
/// usable for threshold filtering. The field [`code`](Self::code) is unrelated
/// to that ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Debugging detail.
    Debug,
    /// Informational message.
    Informational,
    /// Significant but expected event.
    Notice,
    /// Condition that may warrant attention.
    MildWarning,
    /// Condition that likely warrants attention.
    SevereWarning,
    /// Error affecting a single operation.
    MildError,
    /// Error affecting a component.
    SevereError,
    /// Error preventing the server from running.
    FatalError,
}

impl Severity {
    /// Every severity, in ascending importance.
    pub const ALL: &'static [Self] = &[
        Self::Debug,
        Self::Informational,
        Self::Notice,
        Self::MildWarning,
        Self::SevereWarning,
        Self::MildError,
        Self::SevereError,
        Self::FatalError,
    ];

    /// Returns the code stored in the severity field.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Informational => 0x0,
            Self::MildWarning => 0x1,
            Self::SevereWarning => 0x2,
            Self::MildError => 0x3,
            Self::SevereError => 0x4,
            Self::FatalError => 0x5,
            Self::Debug => 0x6,
            Self::Notice => 0x7,
        }
    }

    /// Resolves a severity from its field code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x0 => Some(Self::Informational),
            0x1 => Some(Self::MildWarning),
            0x2 => Some(Self::SevereWarning),
            0x3 => Some(Self::MildError),
            0x4 => Some(Self::SevereError),
            0x5 => Some(Self::FatalError),
            0x6 => Some(Self::Debug),
            0x7 => Some(Self::Notice),
            _ => None,
        }
    }

    /// Returns the error-log severity name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Informational => "INFO",
            Self::Notice => "NOTICE",
            Self::MildWarning => "MILD_WARNING",
            Self::SevereWarning => "SEVERE_WARNING",
            Self::MildError => "MILD_ERROR",
            Self::SevereError => "SEVERE_ERROR",
            Self::FatalError => "FATAL_ERROR",
        }
    }

    /// Parses a severity name (case-insensitive, `-` accepted for `_`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        if normalized == "INFORMATIONAL" {
            return Some(Self::Informational);
        }
        Self::ALL.iter().copied().find(|severity| severity.as_str() == normalized)
    }

    /// Returns true for the error severities.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::MildError | Self::SevereError | Self::FatalError)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Ordinal
// ============================================================================

/// Author-assigned sequence number in the low-order bits of a [`MessageId`].
///
/// # Invariants
/// - Unique within a (category, severity) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ordinal(u16);

impl Ordinal {
    /// Creates an ordinal from a value that already fits the field.
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        Self(value)
    }

    /// Creates an ordinal, rejecting values wider than the ordinal field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Range`] when `value` exceeds [`MAX_ORDINAL`].
    pub fn new(value: u32) -> Result<Self, CodecError> {
        u16::try_from(value).map(Self).map_err(|_| CodecError::Range {
            field: CodecField::Ordinal,
            value,
            max: MAX_ORDINAL,
        })
    }

    /// Returns the raw ordinal.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Message Identifier
// ============================================================================

/// Globally unique message identifier.
///
/// Equality, hashing, and ordering all follow the packed value returned by
/// [`raw`](Self::raw), so identifiers sort the same way they appear in logs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct MessageId {
    /// Subsystem classification.
    category: Category,
    /// Importance level.
    severity: Severity,
    /// Sequence number within the category and severity.
    ordinal: Ordinal,
}

impl MessageId {
    /// Creates an identifier from typed parts.
    #[must_use]
    pub const fn new(category: Category, severity: Severity, ordinal: Ordinal) -> Self {
        Self {
            category,
            severity,
            ordinal,
        }
    }

    /// Parses a packed identifier as seen in logs or alerts.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidField`] when the category or severity
    /// field holds an unknown code.
    pub fn from_raw(raw: u32) -> Result<Self, CodecError> {
        let category_code = (raw & CATEGORY_MASK) >> CATEGORY_SHIFT;
        let severity_code = (raw & SEVERITY_MASK) >> SEVERITY_SHIFT;
        compose_codes(category_code, severity_code, raw & ORDINAL_MASK)
    }

    /// Returns the packed identifier.
    #[must_use]
    #[allow(clippy::cast_lossless, reason = "u32::from is not const; casts only widen.")]
    pub const fn raw(self) -> u32 {
        ((self.category.code() as u32) << CATEGORY_SHIFT)
            | ((self.severity.code() as u32) << SEVERITY_SHIFT)
            | self.ordinal.get() as u32
    }

    /// Returns the category field.
    #[must_use]
    pub const fn category(self) -> Category {
        self.category
    }

    /// Returns the severity field.
    #[must_use]
    pub const fn severity(self) -> Severity {
        self.severity
    }

    /// Returns the ordinal field.
    #[must_use]
    pub const fn ordinal(self) -> Ordinal {
        self.ordinal
    }
}

impl PartialEq for MessageId {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for MessageId {}

impl Hash for MessageId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

impl PartialOrd for MessageId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MessageId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw().cmp(&other.raw())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw().fmt(f)
    }
}

impl From<MessageId> for u32 {
    fn from(id: MessageId) -> Self {
        id.raw()
    }
}

impl TryFrom<u32> for MessageId {
    type Error = CodecError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

// ============================================================================
// SECTION: Codec
// ============================================================================

/// Composes an identifier, rejecting ordinals wider than the ordinal field.
///
/// # Errors
///
/// Returns [`CodecError::Range`] when `ordinal` exceeds [`MAX_ORDINAL`].
pub fn compose(
    category: Category,
    severity: Severity,
    ordinal: u32,
) -> Result<MessageId, CodecError> {
    Ok(MessageId::new(category, severity, Ordinal::new(ordinal)?))
}

/// Composes an identifier from raw field codes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidField`] for unknown category or severity
/// codes and [`CodecError::Range`] for an oversized ordinal.
pub fn compose_codes(
    category_code: u32,
    severity_code: u32,
    ordinal: u32,
) -> Result<MessageId, CodecError> {
    let category = u16::try_from(category_code)
        .ok()
        .and_then(Category::from_code)
        .ok_or(CodecError::InvalidField {
            field: CodecField::Category,
            value: category_code,
        })?;
    let severity = u8::try_from(severity_code)
        .ok()
        .and_then(Severity::from_code)
        .ok_or(CodecError::InvalidField {
            field: CodecField::Severity,
            value: severity_code,
        })?;
    compose(category, severity, ordinal)
}

/// Splits an identifier into its fields.
#[must_use]
pub const fn decompose(id: MessageId) -> (Category, Severity, Ordinal) {
    (id.category, id.severity, id.ordinal)
}
