// crates/message-catalog-core/src/core/args.rs
// ============================================================================
// Module: Message Arguments
// Description: Tagged argument values substituted into message templates.
// Purpose: Replace loosely typed variadic formatting with checked variants.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`MessageArg`] carries one positional argument. Conversions from the common
//! scalar and string types let call sites pass plain values through
//! [`format_message!`](crate::format_message).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;

use crate::core::template::ArgKind;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A positional template argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MessageArg {
    /// Text value.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Single character.
    Char(char),
    /// Floating-point value rendered as fixed-point.
    Float(f64),
}

impl MessageArg {
    /// Returns the kind of value carried.
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        match self {
            Self::Str(_) => ArgKind::String,
            Self::Int(_) => ArgKind::Integer,
            Self::Bool(_) => ArgKind::Boolean,
            Self::Char(_) => ArgKind::Character,
            Self::Float(_) => ArgKind::Decimal,
        }
    }

    /// Returns true when the argument may fill a placeholder of `kind`.
    ///
    /// Every argument satisfies a string placeholder, and integers also
    /// satisfy decimal placeholders.
    #[must_use]
    pub const fn satisfies(&self, kind: ArgKind) -> bool {
        matches!(
            (self, kind),
            (_, ArgKind::String)
                | (Self::Int(_), ArgKind::Integer | ArgKind::Decimal)
                | (Self::Bool(_), ArgKind::Boolean)
                | (Self::Char(_), ArgKind::Character)
                | (Self::Float(_), ArgKind::Decimal)
        )
    }
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => value.fmt(f),
            Self::Bool(value) => value.fmt(f),
            Self::Char(value) => value.fmt(f),
            Self::Float(value) => value.fmt(f),
        }
    }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl From<&str> for MessageArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for MessageArg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for MessageArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for MessageArg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<f64> for MessageArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for MessageArg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

/// Implements lossless integer conversions into [`MessageArg::Int`].
macro_rules! int_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MessageArg {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

int_from!(i8, i16, i32, i64, u8, u16, u32);

/// Implements integer conversions that fall back to text when out of range.
macro_rules! wide_int_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MessageArg {
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
                }
            }
        )*
    };
}

wide_int_from!(u64, usize, isize, i128, u128);
