// crates/message-catalog-core/tests/bootstrap.rs
// ============================================================================
// Module: Catalog Bootstrap Tests
// Description: Module registration, duplicate policies, and global install.
// ============================================================================
//! ## Overview
//! Runs sequential and concurrent bootstrap over small modules and checks the
//! duplicate policy outcomes, the aggregate report, and the process-wide
//! catalog used by `format_message!`.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use message_catalog_core::Catalog;
use message_catalog_core::CatalogError;
use message_catalog_core::CatalogOptions;
use message_catalog_core::CatalogPhase;
use message_catalog_core::DuplicatePolicy;
use message_catalog_core::MessageDef;
use message_catalog_core::MessageModule;
use message_catalog_core::StaticModule;
use message_catalog_core::bootstrap;
use message_catalog_core::bootstrap_concurrent;
use message_catalog_core::define_messages;
use message_catalog_core::format_message;
use message_catalog_core::global;
use message_catalog_core::install;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Fixture Modules
// ============================================================================

mod core_messages {
    //! Core-category fixture messages.

    use message_catalog_core::define_messages;

    define_messages! {
        category: Core;
        table: CORE_MESSAGES;

        /// Abandon cancel refusal.
        pub const CANNOT_CANCEL_ABANDON: MildError(1) = "Abandon requests cannot be canceled";
        /// Remaining lifetime.
        pub const TIME_TO_EXPIRATION: Informational(999) [String] = "Time to expiration: %s";
    }
}

mod protocol_messages {
    //! Protocol-category fixture messages.

    use message_catalog_core::define_messages;

    define_messages! {
        category: Protocol;
        table: PROTOCOL_MESSAGES;

        /// Null ASN.1 element.
        pub const NULL_ELEMENT: MildError(1) =
            "Cannot decode the provided ASN.1 element because it is null";
        /// Identity mapper missing.
        pub const NO_IDENTITY_MAPPER: MildError(299) =
            "Unable to process proxied authorization control because no identity mapper is configured";
    }
}

mod proxied_auth_messages {
    //! Re-declares one protocol message with identical text.

    use message_catalog_core::define_messages;

    define_messages! {
        category: Protocol;
        table: PROXIED_AUTH_MESSAGES;

        /// Identity mapper missing, declared a second time.
        pub const NO_IDENTITY_MAPPER: MildError(299) =
            "Unable to process proxied authorization control because no identity mapper is configured";
    }
}

define_messages! {
    category: Protocol;
    table: CONFLICTING_MESSAGES;

    /// Same identifier as the null element message, different text.
    const CONFLICTING_NULL_ELEMENT: MildError(1) = "A different template for the same id";
}

define_messages! {
    category: Core;
    table: BROKEN_MESSAGES;

    /// Template uses an unsupported directive.
    const BROKEN: Notice(3) = "broken %q";
}

/// Core fixture module.
const CORE: StaticModule = StaticModule::new("core", core_messages::CORE_MESSAGES);
/// Protocol fixture module.
const PROTOCOL: StaticModule = StaticModule::new("protocol", protocol_messages::PROTOCOL_MESSAGES);
/// Module repeating one protocol message verbatim.
const PROXIED_AUTH: StaticModule =
    StaticModule::new("proxied-auth", proxied_auth_messages::PROXIED_AUTH_MESSAGES);
/// Module conflicting with the protocol module.
const CONFLICTING: StaticModule = StaticModule::new("conflicting", CONFLICTING_MESSAGES);
/// Module with an unparseable template.
const BROKEN_MODULE: StaticModule = StaticModule::new("broken", BROKEN_MESSAGES);

/// Builds a catalog using `policy`.
fn catalog(policy: DuplicatePolicy) -> Catalog {
    Catalog::new(CatalogOptions {
        duplicate_policy: policy,
        ..CatalogOptions::default()
    })
}

// ============================================================================
// SECTION: Sequential Bootstrap
// ============================================================================

#[test]
fn bootstrap_registers_and_freezes() -> TestResult {
    let catalog = catalog(DuplicatePolicy::Report);
    let report = bootstrap(&catalog, &[&CORE, &PROTOCOL])?;
    ensure(catalog.phase() == CatalogPhase::Frozen, "catalog not frozen")?;
    ensure(report.entries == 4, format!("expected 4 entries, got {}", report.entries))?;
    ensure(report.inserted() == 4, "insert count wrong")?;
    ensure(report.modules.len() == 2, "module reports missing")?;
    ensure(report.modules[0].module == "core", "module order lost")
}

#[test]
fn identical_duplicate_yields_one_entry() -> TestResult {
    let catalog = catalog(DuplicatePolicy::Reject);
    let report = bootstrap(&catalog, &[&PROTOCOL, &PROXIED_AUTH])?;
    ensure(report.entries == 2, "identical duplicate added an entry")?;
    ensure(report.unchanged() == 1, "identical duplicate not counted")?;
    ensure(report.duplicate_count() == 0, "identical duplicate treated as conflict")?;
    let text = catalog.format(proxied_auth_messages::NO_IDENTITY_MAPPER, &[]);
    ensure(text.ends_with("no identity mapper is configured"), format!("rendered {text:?}"))
}

#[test]
fn report_policy_keeps_first_and_continues() -> TestResult {
    let catalog = catalog(DuplicatePolicy::Report);
    let report = bootstrap(&catalog, &[&PROTOCOL, &CONFLICTING])?;
    ensure(report.duplicate_count() == 1, "conflict not reported")?;
    let duplicate = report.duplicates().next().ok_or("duplicate record missing")?;
    ensure(duplicate.module == "conflicting", "wrong module blamed")?;
    ensure(duplicate.id == CONFLICTING_NULL_ELEMENT.id(), "wrong id recorded")?;
    let kept = catalog.format(protocol_messages::NULL_ELEMENT, &[]);
    ensure(kept.starts_with("Cannot decode"), format!("first template replaced: {kept:?}"))
}

#[test]
fn reject_policy_fails_without_freezing() -> TestResult {
    let catalog = catalog(DuplicatePolicy::Reject);
    let err = bootstrap(&catalog, &[&PROTOCOL, &CONFLICTING]).unwrap_err();
    ensure(
        err == CatalogError::DuplicatesRejected {
            count: 1,
        },
        format!("unexpected error {err:?}"),
    )?;
    ensure(catalog.phase() == CatalogPhase::Bootstrap, "rejected catalog was frozen")
}

#[test]
fn invalid_template_aborts_bootstrap() {
    let catalog = catalog(DuplicatePolicy::Report);
    let err = bootstrap(&catalog, &[&CORE, &BROKEN_MODULE]).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidTemplate { id, .. } if id == BROKEN.id()));
    assert_eq!(catalog.phase(), CatalogPhase::Bootstrap);
}

#[test]
fn custom_module_registers_through_trait() -> TestResult {
    /// Module built from definitions computed at runtime.
    struct Runtime {
        /// Definitions to register.
        definitions: Vec<MessageDef>,
    }

    impl MessageModule for Runtime {
        fn name(&self) -> &str {
            "runtime"
        }

        fn definitions(&self) -> &[MessageDef] {
            &self.definitions
        }
    }

    let module = Runtime {
        definitions: core_messages::CORE_MESSAGES.to_vec(),
    };
    let catalog = catalog(DuplicatePolicy::Reject);
    let report = bootstrap(&catalog, &[&module])?;
    ensure(report.modules[0].module == "runtime", "module name not reported")?;
    ensure(report.entries == 2, "runtime module entries missing")
}

// ============================================================================
// SECTION: Concurrent Bootstrap
// ============================================================================

#[test]
fn concurrent_bootstrap_matches_sequential() -> TestResult {
    let modules: [&dyn MessageModule; 3] = [&CORE, &PROTOCOL, &PROXIED_AUTH];
    let sequential = catalog(DuplicatePolicy::Reject);
    bootstrap(&sequential, &modules)?;
    let concurrent = catalog(DuplicatePolicy::Reject);
    let report = bootstrap_concurrent(&concurrent, &modules)?;
    ensure(sequential.entries() == concurrent.entries(), "catalogs differ")?;
    ensure(report.inserted() + report.unchanged() == 5, "definitions lost")?;
    ensure(report.modules[2].module == "proxied-auth", "module order lost")
}

#[test]
fn concurrent_bootstrap_applies_reject_policy() {
    let catalog = catalog(DuplicatePolicy::Reject);
    let err = bootstrap_concurrent(&catalog, &[&PROTOCOL, &CONFLICTING]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicatesRejected {
            count: 1,
        }
    );
}

// ============================================================================
// SECTION: Global Catalog
// ============================================================================

#[test]
fn installed_catalog_serves_format_macro() -> TestResult {
    let catalog = catalog(DuplicatePolicy::Report);
    bootstrap(&catalog, &[&CORE])?;
    install(catalog).map_err(|_| "a global catalog was already installed")?;
    ensure(install(Catalog::default()).is_err(), "second install replaced the catalog")?;
    let text = format_message!(core_messages::TIME_TO_EXPIRATION, "5 seconds");
    ensure(text == "Time to expiration: 5 seconds", format!("rendered {text:?}"))?;
    ensure(global().len() == 2, "global catalog is not the installed one")?;
    let text = format_message!(core_messages::CANNOT_CANCEL_ABANDON);
    ensure(text == "Abandon requests cannot be canceled", format!("rendered {text:?}"))
}
