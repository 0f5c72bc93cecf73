// crates/message-catalog-core/src/runtime/formatter.rs
// ============================================================================
// Module: Message Formatter
// Description: Substitutes positional arguments into registered templates.
// Purpose: Produce final message text without ever failing.
// Dependencies: crate::core, tracing
// ============================================================================

//! ## Overview
//! Formatting runs inside error-reporting paths, so every input produces a
//! string. Kind mismatches render the argument's plain text in its position,
//! missing arguments render a marker, surplus arguments are dropped, and an
//! unknown identifier renders a fallback naming the identifier.
//!
//! ## Invariants
//! - [`render`] and [`render_unknown`] never panic and never return an error.
//! - Rendering does not mutate any state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::ArgKind;
use crate::core::Conversion;
use crate::core::MessageArg;
use crate::core::MessageId;
use crate::core::Placeholder;
use crate::core::Segment;
use crate::core::Template;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Formatting behavior for degraded inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Text rendered for a placeholder without an argument. When unset, the
    /// placeholder's own directive (for example `%d`) is rendered.
    pub missing_argument_marker: Option<String>,
    /// Emit a debug event when arguments do not match the template.
    pub log_argument_mismatches: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            missing_argument_marker: None,
            log_argument_mismatches: true,
        }
    }
}

// ============================================================================
// SECTION: Mismatches
// ============================================================================

/// A disagreement between a template and the supplied arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArgMismatch {
    /// The argument at `position` has the wrong kind.
    Kind {
        /// Zero-based argument position.
        position: usize,
        /// Kind the placeholder expects.
        expected: ArgKind,
        /// Kind supplied.
        actual: ArgKind,
    },
    /// No argument was supplied for the placeholder at `position`.
    Missing {
        /// Zero-based argument position.
        position: usize,
        /// Kind the placeholder expects.
        expected: ArgKind,
    },
    /// More arguments were supplied than the template consumes.
    Surplus {
        /// Number of arguments the template consumes.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },
}

/// Compares arguments against a template's placeholders without rendering.
///
/// Returns every mismatch in argument order; an empty vector means the
/// arguments satisfy the template exactly.
#[must_use]
pub fn check_arguments(template: &Template, args: &[MessageArg]) -> Vec<ArgMismatch> {
    let mut mismatches = Vec::new();
    let mut arity = 0;
    for (position, placeholder) in template.placeholders().enumerate() {
        arity += 1;
        let expected = placeholder.kind();
        match args.get(position) {
            Some(arg) if arg.satisfies(expected) => {}
            Some(arg) => mismatches.push(ArgMismatch::Kind {
                position,
                expected,
                actual: arg.kind(),
            }),
            None => mismatches.push(ArgMismatch::Missing {
                position,
                expected,
            }),
        }
    }
    if args.len() > arity {
        mismatches.push(ArgMismatch::Surplus {
            expected: arity,
            actual: args.len(),
        });
    }
    mismatches
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders `template` with `args` for the message `id`.
#[must_use]
pub fn render(
    id: MessageId,
    template: &Template,
    args: &[MessageArg],
    options: &FormatOptions,
) -> String {
    let mut output = String::with_capacity(template.as_str().len());
    let mut position = 0;
    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(placeholder) => {
                match args.get(position) {
                    Some(arg) => render_argument(&mut output, placeholder, arg),
                    None => output.push_str(
                        options
                            .missing_argument_marker
                            .as_deref()
                            .unwrap_or_else(|| placeholder.directive()),
                    ),
                }
                position += 1;
            }
        }
    }
    let degraded = position != args.len() || has_kind_mismatch(template, args);
    if options.log_argument_mismatches && degraded {
        let mismatches = check_arguments(template, args);
        tracing::debug!(
            message_id = id.raw(),
            category = %id.category(),
            mismatches = mismatches.len(),
            expected = position,
            supplied = args.len(),
            "message arguments do not match template"
        );
    }
    output
}

/// Renders the fallback text for an identifier with no template.
#[must_use]
pub fn render_unknown(id: MessageId, args: &[MessageArg]) -> String {
    let mut output = format!("Unknown message for message ID {}", id.raw());
    if !args.is_empty() {
        output.push_str(" (arguments: ");
        for (index, arg) in args.iter().enumerate() {
            if index > 0 {
                output.push_str(", ");
            }
            let _ = write!(output, "{arg}");
        }
        output.push(')');
    }
    output
}

/// Returns true when any supplied argument has the wrong kind.
fn has_kind_mismatch(template: &Template, args: &[MessageArg]) -> bool {
    template.placeholders().zip(args).any(|(placeholder, arg)| !arg.satisfies(placeholder.kind()))
}

/// Appends one argument rendered for `placeholder`.
fn render_argument(output: &mut String, placeholder: &Placeholder, arg: &MessageArg) {
    let _ = match (placeholder.conversion(), arg) {
        (Conversion::Integer, MessageArg::Int(value)) => write!(output, "{value}"),
        (Conversion::GroupedInteger, MessageArg::Int(value)) => {
            output.push_str(&group_thousands(*value));
            Ok(())
        }
        (Conversion::Hex, MessageArg::Int(value)) => write!(output, "{value:x}"),
        (Conversion::Boolean, MessageArg::Bool(value)) => write!(output, "{value}"),
        (Conversion::Character, MessageArg::Char(value)) => write!(output, "{value}"),
        (
            Conversion::Decimal {
                precision,
            },
            MessageArg::Float(value),
        ) => {
            output.push_str(&format_fixed(*value, usize::from(precision)));
            Ok(())
        }
        (
            Conversion::Decimal {
                precision,
            },
            MessageArg::Int(value),
        ) => {
            let _ = write!(output, "{value}");
            if precision > 0 {
                output.push('.');
                output.extend(std::iter::repeat_n('0', usize::from(precision)));
            }
            Ok(())
        }
        _ => write!(output, "{arg}"),
    };
}

/// Renders `value` with `precision` fractional digits.
///
/// Rounds half up on the shortest decimal representation of `value`, so
/// `0.125` renders as `0.13` at two digits and `0.15` as `0.2` at one.
fn format_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{value:.precision$}");
    }
    let shortest = value.abs().to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut digits = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .collect::<Vec<u8>>();
    let mut whole_len = whole.len();
    if fraction.as_bytes().get(precision).is_some_and(|digit| *digit >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            whole_len += 1;
        }
    }
    let mut rendered = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        rendered.push('-');
    }
    for (index, digit) in digits.into_iter().enumerate() {
        if index == whole_len {
            rendered.push('.');
        }
        rendered.push(char::from(digit));
    }
    rendered
}

/// Formats an integer with `,` separating groups of three digits.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && index % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
