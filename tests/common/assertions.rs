//! Custom assertions for call sign lookups.

use callsign_regex::{CompiledAllocations, MatchOutcome};

/// Asserts that `call` resolves to `country`.
///
/// # Panics
/// Panics with the compiled pattern if the lookup disagrees.
pub fn assert_country(compiled: &CompiledAllocations, call: &str, country: &str) {
    let outcome = compiled.matcher().lookup(call);
    assert_eq!(
        outcome.country(),
        Some(country),
        "'{}' should resolve to '{}' but got {:?}\nPattern: {}",
        call,
        country,
        outcome,
        compiled.pattern()
    );
}

/// Asserts that `call` matches no allocation.
pub fn assert_no_match(compiled: &CompiledAllocations, call: &str) {
    let outcome = compiled.matcher().lookup(call);
    assert_eq!(
        outcome,
        MatchOutcome::NoMatch,
        "'{}' should not match\nPattern: {}",
        call,
        compiled.pattern()
    );
}
