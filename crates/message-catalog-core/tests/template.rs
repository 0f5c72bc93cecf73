// crates/message-catalog-core/tests/template.rs
// ============================================================================
// Module: Template Parsing Tests
// Description: Directive parsing, signatures, and parse failures.
// ============================================================================
//! ## Overview
//! Covers every supported directive, escape handling, the derived argument
//! signature, and the rejection of malformed templates.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use message_catalog_core::ArgKind;
use message_catalog_core::Conversion;
use message_catalog_core::Segment;
use message_catalog_core::Template;
use message_catalog_core::TemplateError;
use support::TestResult;
use support::ensure;

#[test]
fn plain_text_has_no_placeholders() -> TestResult {
    let template = Template::parse("Abandon requests cannot be canceled")?;
    ensure(template.arity() == 0, "unexpected placeholders")?;
    ensure(template.segments().len() == 1, "expected a single literal segment")?;
    ensure(template.as_str() == "Abandon requests cannot be canceled", "source not kept")
}

#[test]
fn every_directive_maps_to_a_conversion() -> TestResult {
    let template = Template::parse("%s %d %,d %x %b %c %f %.1f %.2f")?;
    let conversions = template.placeholders().map(|p| p.conversion()).collect::<Vec<_>>();
    ensure(
        conversions
            == vec![
                Conversion::String,
                Conversion::Integer,
                Conversion::GroupedInteger,
                Conversion::Hex,
                Conversion::Boolean,
                Conversion::Character,
                Conversion::Decimal {
                    precision: 6,
                },
                Conversion::Decimal {
                    precision: 1,
                },
                Conversion::Decimal {
                    precision: 2,
                },
            ],
        format!("unexpected conversions {conversions:?}"),
    )
}

#[test]
fn signature_lists_placeholder_kinds() -> TestResult {
    let template = Template::parse("Processed %,d entries in %d seconds (%.1f/sec) for %s")?;
    ensure(
        template.signature()
            == vec![ArgKind::Integer, ArgKind::Integer, ArgKind::Decimal, ArgKind::String],
        format!("unexpected signature {:?}", template.signature()),
    )
}

#[test]
fn escapes_become_literal_text() -> TestResult {
    let template = Template::parse("100%% done%nnext %s")?;
    ensure(template.arity() == 1, "escapes counted as placeholders")?;
    match template.segments() {
        [Segment::Literal(text), Segment::Placeholder(placeholder)] => {
            ensure(&**text == "100% done\nnext ", format!("literal was {text:?}"))?;
            ensure(placeholder.directive() == "%s", "directive text not kept")
        }
        other => Err(format!("unexpected segments {other:?}").into()),
    }
}

#[test]
fn placeholder_keeps_directive_text() -> TestResult {
    let template = Template::parse("Buffer size per thread = %,d")?;
    let directives = template.placeholders().map(|p| p.directive().to_string()).collect::<Vec<_>>();
    ensure(directives == vec!["%,d".to_string()], format!("directives were {directives:?}"))
}

#[test]
fn equality_is_by_source_text() -> TestResult {
    let left = Template::parse("Time to expiration: %s")?;
    let right = Template::try_from("Time to expiration: %s")?;
    let other = Template::parse("Time to expiration: %d")?;
    ensure(left == right, "identical sources compare unequal")?;
    ensure(left != other, "different sources compare equal")
}

#[test]
fn unknown_directive_is_rejected_with_offset() {
    let err = Template::parse("value %q here").unwrap_err();
    assert_eq!(
        err,
        TemplateError::UnknownDirective {
            offset: 6,
            directive: "%q".to_string(),
        }
    );
}

#[test]
fn trailing_percent_is_rejected() {
    let err = Template::parse("100%").unwrap_err();
    assert_eq!(
        err,
        TemplateError::DanglingPercent {
            offset: 3,
        }
    );
}

#[test]
fn oversized_precision_is_rejected() {
    let err = Template::parse("%.18f").unwrap_err();
    assert_eq!(
        err,
        TemplateError::PrecisionTooLarge {
            offset: 0,
            precision: 18,
        }
    );
    assert!(Template::parse("%.17f").is_ok());
}

#[test]
fn precision_without_conversion_is_rejected() {
    assert!(matches!(Template::parse("%.2d"), Err(TemplateError::UnknownDirective { .. })));
    assert!(matches!(Template::parse("%.f"), Err(TemplateError::UnknownDirective { .. })));
}

#[test]
fn multibyte_text_around_directives_is_preserved() -> TestResult {
    let template = Template::parse("größe: %d ✓")?;
    ensure(template.arity() == 1, "placeholder not found")?;
    ensure(template.to_string() == "größe: %d ✓", "display differs from source")
}
