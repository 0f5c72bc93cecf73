// crates/message-catalog-core/tests/registry.rs
// ============================================================================
// Module: Catalog Registry Tests
// Description: Registration policy, lookup, enumeration, and phases.
// ============================================================================
//! ## Overview
//! Exercises the plain registry table and the phased catalog: first
//! registration wins, identical re-registration is a no-op, enumeration is
//! ordered, and the frozen phase refuses or publishes late registrations.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use std::sync::Arc;
use std::thread;

use message_catalog_core::ArgKind;
use message_catalog_core::Catalog;
use message_catalog_core::CatalogError;
use message_catalog_core::CatalogOptions;
use message_catalog_core::CatalogPhase;
use message_catalog_core::CatalogTable;
use message_catalog_core::Category;
use message_catalog_core::MessageDef;
use message_catalog_core::MessageId;
use message_catalog_core::Ordinal;
use message_catalog_core::Registration;
use message_catalog_core::Severity;
use message_catalog_core::compose;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a core-category identifier.
fn core_id(severity: Severity, ordinal: u16) -> MessageId {
    MessageId::new(Category::Core, severity, Ordinal::from_u16(ordinal))
}

// ============================================================================
// SECTION: Table
// ============================================================================

#[test]
fn new_table_is_empty() -> TestResult {
    let table = CatalogTable::new();
    ensure(table.is_empty(), "new table has entries")?;
    ensure(table.lookup(core_id(Severity::MildError, 1)).is_none(), "lookup found an entry")
}

#[test]
fn registered_template_is_found() -> TestResult {
    let mut table = CatalogTable::new();
    let id = core_id(Severity::MildError, 1);
    let outcome = table.register_text(id, "Abandon requests cannot be canceled")?;
    ensure(outcome == Registration::Inserted, "expected an insert")?;
    let template = table.lookup(id).ok_or("template missing")?;
    ensure(template.as_str() == "Abandon requests cannot be canceled", "wrong template")?;
    ensure(table.len() == 1, "size should be one")
}

#[test]
fn identical_reregistration_is_unchanged() -> TestResult {
    let mut table = CatalogTable::new();
    let id = compose(Category::Protocol, Severity::MildError, 299)?;
    table.register_text(id, "No identity mapper is configured")?;
    let outcome = table.register_text(id, "No identity mapper is configured")?;
    ensure(outcome == Registration::Unchanged, "identical registration not a no-op")?;
    ensure(table.len() == 1, "identical registration added an entry")
}

#[test]
fn conflicting_registration_keeps_first_template() -> TestResult {
    let mut table = CatalogTable::new();
    let id = core_id(Severity::Notice, 7);
    table.register_text(id, "first %s")?;
    let err = table.register_text(id, "second %s").unwrap_err();
    ensure(
        err == CatalogError::DuplicateRegistration {
            id,
            existing: "first %s".to_string(),
            rejected: "second %s".to_string(),
        },
        format!("unexpected error {err:?}"),
    )?;
    let kept = table.lookup(id).ok_or("entry lost")?;
    ensure(kept.as_str() == "first %s", "first registration was replaced")
}

#[test]
fn ordinal_reuse_across_severities_is_allowed() -> TestResult {
    let mut table = CatalogTable::new();
    table.register_text(core_id(Severity::MildError, 5), "error five")?;
    table.register_text(core_id(Severity::Informational, 5), "info five")?;
    ensure(table.len() == 2, "severities share an ordinal namespace")
}

#[test]
fn invalid_template_names_the_id() {
    let mut table = CatalogTable::new();
    let id = core_id(Severity::Debug, 3);
    let err = table.register_text(id, "bad %q").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidTemplate { id: failed, .. } if failed == id));
    assert!(table.is_empty());
}

#[test]
fn declared_signature_must_match_template() {
    let def = MessageDef::new(Category::Core, Severity::Informational, Ordinal::from_u16(999), "%d")
        .with_signature(&[ArgKind::String]);
    let mut table = CatalogTable::new();
    let err = table.register_definition(&def).unwrap_err();
    assert_eq!(
        err,
        CatalogError::SignatureMismatch {
            id: def.id(),
            declared: "string".to_string(),
            actual: "integer".to_string(),
        }
    );
}

#[test]
fn entries_are_ordered_and_restartable() -> TestResult {
    let mut table = CatalogTable::new();
    let high = compose(Category::Jeb, Severity::Notice, 29)?;
    let low = compose(Category::Core, Severity::MildError, 1)?;
    let mid = compose(Category::Protocol, Severity::MildError, 1)?;
    table.register_text(high, "high")?;
    table.register_text(low, "low")?;
    table.register_text(mid, "mid")?;

    let first = table.entries();
    let ids = first.iter().map(|entry| entry.id).collect::<Vec<_>>();
    ensure(ids == vec![low, mid, high], format!("unexpected order {ids:?}"))?;
    ensure(table.entries() == first, "second enumeration differs")?;
    let entry = &first[1];
    ensure(
        entry.category == Category::Protocol
            && entry.severity == Severity::MildError
            && entry.ordinal.get() == 1,
        "entry fields do not match the id",
    )
}

// ============================================================================
// SECTION: Catalog Phases
// ============================================================================

#[test]
fn catalog_freezes_once() -> TestResult {
    let catalog = Catalog::default();
    let id = core_id(Severity::MildError, 1);
    catalog.register(id, "Abandon requests cannot be canceled")?;
    ensure(catalog.phase() == CatalogPhase::Bootstrap, "catalog started frozen")?;
    ensure(catalog.is_registered(id), "bootstrap reads do not see staged entries")?;

    let snapshot = catalog.freeze();
    ensure(catalog.phase() == CatalogPhase::Frozen, "catalog not frozen")?;
    ensure(snapshot.len() == 1, "snapshot lost entries")?;
    let again = catalog.freeze();
    ensure(Arc::ptr_eq(&snapshot, &again), "second freeze republished")?;
    ensure(catalog.lookup(id).is_some(), "frozen lookup failed")
}

#[test]
fn snapshot_copies_staging_and_shares_published_table() -> TestResult {
    let catalog = Catalog::default();
    let first = core_id(Severity::Notice, 1);
    catalog.register(first, "first")?;
    let staged = catalog.snapshot();
    catalog.register(core_id(Severity::Notice, 2), "second")?;
    ensure(staged.len() == 1, "bootstrap snapshot tracked later writes")?;

    let published = catalog.freeze();
    let shared = catalog.snapshot();
    ensure(Arc::ptr_eq(&published, &shared), "frozen snapshot was copied")?;
    ensure(shared.len() == 2, "frozen snapshot lost entries")
}

#[test]
fn catalog_from_table_starts_frozen() -> TestResult {
    let mut table = CatalogTable::new();
    let id = core_id(Severity::MildError, 1);
    table.register_text(id, "Abandon requests cannot be canceled")?;
    let catalog = Catalog::from_table(table, CatalogOptions::default());
    ensure(catalog.phase() == CatalogPhase::Frozen, "prepared catalog not frozen")?;
    ensure(catalog.len() == 1, "prepared entries missing")?;
    ensure(
        catalog.format(id, &[]) == "Abandon requests cannot be canceled",
        "prepared entry does not format",
    )?;
    ensure(catalog.register(core_id(Severity::Notice, 1), "late").is_err(), "late write accepted")
}

#[test]
fn frozen_catalog_refuses_late_registration() -> TestResult {
    let catalog = Catalog::default();
    catalog.freeze();
    let id = core_id(Severity::Notice, 1);
    let err = catalog.register(id, "late").unwrap_err();
    ensure(
        err == CatalogError::Frozen {
            id,
        },
        format!("unexpected error {err:?}"),
    )?;
    ensure(catalog.is_empty(), "late registration was applied")
}

#[test]
fn late_registration_publishes_new_snapshot_when_enabled() -> TestResult {
    let catalog = Catalog::new(CatalogOptions {
        allow_late_registration: true,
        ..CatalogOptions::default()
    });
    let early = core_id(Severity::Notice, 1);
    catalog.register(early, "early")?;
    let before = catalog.freeze();

    let late = core_id(Severity::Notice, 2);
    ensure(catalog.register(late, "late")? == Registration::Inserted, "late insert failed")?;
    ensure(before.lookup(late).is_none(), "old snapshot was mutated")?;
    ensure(catalog.lookup(late).is_some(), "late entry not visible")?;
    ensure(catalog.len() == 2, "size not updated")?;
    ensure(catalog.register(early, "early")? == Registration::Unchanged, "identical not a no-op")?;
    let err = catalog.register(early, "changed").unwrap_err();
    ensure(
        matches!(err, CatalogError::DuplicateRegistration { .. }),
        format!("unexpected error {err:?}"),
    )
}

#[test]
fn try_lookup_reports_unknown_id() {
    let catalog = Catalog::default();
    let id = core_id(Severity::Debug, 77);
    assert_eq!(catalog.try_lookup(id).unwrap_err(), CatalogError::UnknownMessageId(id));
}

#[test]
fn concurrent_registration_loses_no_updates() -> TestResult {
    let catalog = Catalog::default();
    thread::scope(|scope| {
        for worker in 0 .. 8u16 {
            let catalog = &catalog;
            scope.spawn(move || {
                for ordinal in 0 .. 250u16 {
                    let id = core_id(Severity::Informational, worker * 1_000 + ordinal);
                    catalog.register(id, "message %d").unwrap();
                }
            });
        }
    });
    ensure(catalog.len() == 2_000, format!("expected 2000 entries, found {}", catalog.len()))?;
    catalog.freeze();
    ensure(catalog.entries().len() == 2_000, "freeze dropped entries")
}

#[test]
fn readers_during_freeze_see_a_consistent_table() -> TestResult {
    let catalog = Catalog::default();
    for ordinal in 0 .. 100u16 {
        catalog.register(core_id(Severity::Notice, ordinal), "entry")?;
    }
    let sizes = thread::scope(|scope| {
        let readers = (0 .. 4)
            .map(|_| {
                scope.spawn(|| (0 .. 200).map(|_| catalog.entries().len()).collect::<Vec<_>>())
            })
            .collect::<Vec<_>>();
        catalog.freeze();
        readers.into_iter().flat_map(|reader| reader.join().unwrap()).collect::<Vec<_>>()
    });
    ensure(sizes.iter().all(|size| *size == 100), "a reader observed a partial table")
}
