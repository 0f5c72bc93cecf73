// crates/message-catalog-core/src/core/template.rs
// ============================================================================
// Module: Message Templates
// Description: Parsed positional format strings bound to message identifiers.
// Purpose: Validate placeholder directives once, at registration time.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`Template`] is a format string split into literal text and typed
//! placeholders. Placeholders consume arguments strictly in order:
//!
//! | Directive | Kind | Rendering |
//! | --- | --- | --- |
//! | `%s` | [`ArgKind::String`] | textual form of any argument |
//! | `%d` | [`ArgKind::Integer`] | decimal |
//! | `%,d` | [`ArgKind::Integer`] | decimal with `,` thousands grouping |
//! | `%x` | [`ArgKind::Integer`] | lower-case hexadecimal |
//! | `%b` | [`ArgKind::Boolean`] | `true` / `false` |
//! | `%c` | [`ArgKind::Character`] | single character |
//! | `%f`, `%.Nf` | [`ArgKind::Decimal`] | fixed-point, default precision 6 |
//!
//! `%%` renders a literal percent sign and `%n` a newline.
//!
//! ## Invariants
//! - A parsed template always re-renders its literal text unchanged.
//! - Two templates are equal exactly when their source text is equal.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Precision used by `%f` when none is declared.
pub const DEFAULT_DECIMAL_PRECISION: u8 = 6;
/// Largest precision accepted by `%.Nf`.
pub const MAX_DECIMAL_PRECISION: u8 = 17;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while parsing a template.
///
/// # Invariants
/// - `offset` is the byte offset of the offending `%` in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The directive following `%` is not supported.
    #[error("unsupported directive `{directive}` at byte {offset}")]
    UnknownDirective {
        /// Byte offset of the directive.
        offset: usize,
        /// Directive text as written.
        directive: String,
    },
    /// The template ends with an unterminated `%`.
    #[error("dangling `%` at byte {offset}")]
    DanglingPercent {
        /// Byte offset of the directive.
        offset: usize,
    },
    /// A `%.Nf` directive declares a precision above [`MAX_DECIMAL_PRECISION`].
    #[error("decimal precision {precision} at byte {offset} exceeds {MAX_DECIMAL_PRECISION}")]
    PrecisionTooLarge {
        /// Byte offset of the directive.
        offset: usize,
        /// Declared precision.
        precision: u32,
    },
}

// ============================================================================
// SECTION: Placeholder Types
// ============================================================================

/// Argument kind a placeholder expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgKind {
    /// Any textual value.
    String,
    /// Signed integer.
    Integer,
    /// Boolean flag.
    Boolean,
    /// Single character.
    Character,
    /// Fixed-point decimal.
    Decimal,
}

impl ArgKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Character => "character",
            Self::Decimal => "decimal",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering rule declared by a placeholder directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `%s`.
    String,
    /// `%d`.
    Integer,
    /// `%,d`.
    GroupedInteger,
    /// `%x`.
    Hex,
    /// `%b`.
    Boolean,
    /// `%c`.
    Character,
    /// `%f` or `%.Nf`.
    Decimal {
        /// Digits after the decimal point.
        precision: u8,
    },
}

impl Conversion {
    /// Returns the argument kind this conversion expects.
    #[must_use]
    pub const fn kind(self) -> ArgKind {
        match self {
            Self::String => ArgKind::String,
            Self::Integer | Self::GroupedInteger | Self::Hex => ArgKind::Integer,
            Self::Boolean => ArgKind::Boolean,
            Self::Character => ArgKind::Character,
            Self::Decimal {
                ..
            } => ArgKind::Decimal,
        }
    }
}

/// A typed placeholder within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Rendering rule.
    conversion: Conversion,
    /// Directive text as written in the source (for example `%.1f`).
    directive: Box<str>,
}

impl Placeholder {
    /// Returns the rendering rule.
    #[must_use]
    pub const fn conversion(&self) -> Conversion {
        self.conversion
    }

    /// Returns the expected argument kind.
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        self.conversion.kind()
    }

    /// Returns the directive text as written in the template.
    #[must_use]
    pub fn directive(&self) -> &str {
        &self.directive
    }
}

/// Parsed template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, with `%%` and `%n` already resolved.
    Literal(Box<str>),
    /// Argument placeholder.
    Placeholder(Placeholder),
}

// ============================================================================
// SECTION: Template
// ============================================================================

/// Parsed message template. Cloning is cheap.
#[derive(Clone)]
pub struct Template {
    /// Source text as registered.
    source: Arc<str>,
    /// Parsed segments in source order.
    segments: Arc<[Segment]>,
}

impl Template {
    /// Parses a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when a directive is unsupported or malformed.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let segments = parse_segments(source)?;
        Ok(Self {
            source: Arc::from(source),
            segments: segments.into(),
        })
    }

    /// Returns the source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the placeholders in argument order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }

    /// Returns the number of arguments the template consumes.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.placeholders().count()
    }

    /// Returns the argument kinds in order.
    #[must_use]
    pub fn signature(&self) -> Vec<ArgKind> {
        self.placeholders().map(Placeholder::kind).collect()
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Template {}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Template").field(&self.source).finish()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl TryFrom<&str> for Template {
    type Error = TemplateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Splits `source` into literal and placeholder segments.
fn parse_segments(source: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = source;
    let mut consumed = 0;

    while let Some(index) = rest.find('%') {
        literal.push_str(&rest[.. index]);
        let offset = consumed + index;
        let directive = &rest[index ..];
        let (parsed, length) = parse_directive(directive, offset)?;
        match parsed {
            Directive::Text(text) => literal.push(text),
            Directive::Placeholder(conversion) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal).into()));
                }
                segments.push(Segment::Placeholder(Placeholder {
                    conversion,
                    directive: directive[.. length].into(),
                }));
            }
        }
        rest = &directive[length ..];
        consumed = offset + length;
    }
    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal.into()));
    }
    Ok(segments)
}

/// Outcome of parsing a single `%` directive.
enum Directive {
    /// Escape that expands to literal text.
    Text(char),
    /// Argument placeholder.
    Placeholder(Conversion),
}

/// Parses the directive at the start of `text` (which begins with `%`).
///
/// Returns the directive and its length in bytes.
fn parse_directive(text: &str, offset: usize) -> Result<(Directive, usize), TemplateError> {
    let body = &text[1 ..];
    let Some(first) = body.chars().next() else {
        return Err(TemplateError::DanglingPercent {
            offset,
        });
    };
    let simple = match first {
        '%' => Some(Directive::Text('%')),
        'n' => Some(Directive::Text('\n')),
        's' => Some(Directive::Placeholder(Conversion::String)),
        'd' => Some(Directive::Placeholder(Conversion::Integer)),
        'x' => Some(Directive::Placeholder(Conversion::Hex)),
        'b' => Some(Directive::Placeholder(Conversion::Boolean)),
        'c' => Some(Directive::Placeholder(Conversion::Character)),
        'f' => Some(Directive::Placeholder(Conversion::Decimal {
            precision: DEFAULT_DECIMAL_PRECISION,
        })),
        _ => None,
    };
    if let Some(directive) = simple {
        return Ok((directive, 2));
    }
    if body.starts_with(",d") {
        return Ok((Directive::Placeholder(Conversion::GroupedInteger), 3));
    }
    if let Some(after_dot) = body.strip_prefix('.') {
        let digits = after_dot.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && after_dot[digits ..].starts_with('f') {
            let length = 1 + 1 + digits + 1;
            let precision = after_dot[.. digits].parse::<u32>().unwrap_or(u32::MAX);
            let precision = u8::try_from(precision)
                .ok()
                .filter(|value| *value <= MAX_DECIMAL_PRECISION)
                .ok_or(TemplateError::PrecisionTooLarge {
                    offset,
                    precision,
                })?;
            return Ok((
                Directive::Placeholder(Conversion::Decimal {
                    precision,
                }),
                length,
            ));
        }
    }
    Err(TemplateError::UnknownDirective {
        offset,
        directive: format!("%{first}"),
    })
}
