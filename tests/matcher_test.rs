//! Call sign lookup tests against a realistic table.

use callsign_regex::{AllocationCompiler, AllocationRow, CompiledAllocations, MatchOutcome};

mod common;
use common::*;

fn sample() -> CompiledAllocations {
    AllocationCompiler::new()
        .compile(&TableFixture::sample().rows())
        .unwrap()
}

mod resolution {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        let compiled = sample();
        assert_country(&compiled, "DA1ABC", "Germany (Federal Republic of)");
        assert_country(&compiled, "DB0XYZ", "Germany (Federal Republic of)");
        assert_country(&compiled, "VE3ABC", "Canada");
        assert_country(&compiled, "4X4ABC", "Israel (State of)");
        assert_country(&compiled, "3DA0XY", "Eswatini (Kingdom of)");
        assert_country(&compiled, "3DN0XY", "Fiji (Republic of)");
        assert_country(&compiled, "K1ABC", "United States of America");
    }

    #[test]
    fn test_case_insensitive() {
        let compiled = sample();
        assert_country(&compiled, "ve3abc", "Canada");
        assert_country(&compiled, "Da1Abc", "Germany (Federal Republic of)");
    }

    #[test]
    fn test_over_matched_capture_is_shortened() {
        let compiled = sample();
        // VE[A-Z]? captures VEX, the registered key is VE
        assert_eq!(
            compiled.matcher().lookup("VEX1AB"),
            MatchOutcome::Match {
                prefix: "VE".to_string(),
                country: "Canada".to_string()
            }
        );
        // K[A-Z]{0,2} captures KAB, the registered key is K
        assert_eq!(
            compiled.matcher().lookup("KAB1C"),
            MatchOutcome::Match {
                prefix: "K".to_string(),
                country: "United States of America".to_string()
            }
        );
    }

    #[test]
    fn test_partial_group_resolves_exact_key() {
        let compiled = sample();
        assert_eq!(
            compiled.matcher().lookup("3DM1A"),
            MatchOutcome::Match {
                prefix: "3DM".to_string(),
                country: "Eswatini (Kingdom of)".to_string()
            }
        );
    }
}

mod rejection {
    use super::*;

    #[test]
    fn test_unallocated_prefixes() {
        let compiled = sample();
        assert_no_match(&compiled, "ZZ9ZZZ");
        assert_no_match(&compiled, "DC1ABC");
        assert_no_match(&compiled, "W1AW");
    }

    #[test]
    fn test_malformed_call_signs() {
        let compiled = sample();
        for call in ["", "K", "VE", "VE3", "VEABC", "DA1", "3D1ABC", "--", "K1ABC1"] {
            let outcome = compiled.matcher().lookup(call);
            // K1ABC1 still has a valid call sign at its start
            if call == "K1ABC1" {
                assert!(outcome.is_match());
            } else {
                assert_eq!(outcome, MatchOutcome::NoMatch, "{:?}", call);
            }
        }
    }

    #[test]
    fn test_unmatched_call_does_not_stop_batch() {
        let compiled = sample();
        let matcher = compiled.matcher();
        let lines: Vec<String> = ["zz9zzz", "ve3abc", "W1AW", "dA1aBc"]
            .iter()
            .map(|call| matcher.describe(call))
            .collect();
        assert_eq!(
            lines,
            vec![
                "zz9zzz does not match",
                "ve3abc - Canada",
                "W1AW does not match",
                "dA1aBc - Germany (Federal Republic of)",
            ]
        );
    }
}

mod concurrency {
    use super::*;
    use std::thread;

    #[test]
    fn test_frozen_table_shared_across_threads() {
        let compiled = sample();
        thread::scope(|scope| {
            for call in ["DA1ABC", "VE3ABC", "K1ABC", "ZZ9ZZZ"] {
                let compiled = &compiled;
                scope.spawn(move || {
                    let expected = call != "ZZ9ZZZ";
                    assert_eq!(compiled.matcher().lookup(call).is_match(), expected);
                });
            }
        });
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let compiled = AllocationCompiler::new()
            .compile(&Vec::<AllocationRow>::new())
            .unwrap();
        assert_no_match(&compiled, "K1ABC");
    }
}
