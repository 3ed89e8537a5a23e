//! Property-based tests for the option parser and registry.
//!
//! Invariants that should hold for all inputs:
//! - Last write wins: the final occurrence of a boolean flag decides it
//! - Round trip: any i32 survives `-timeout N`
//! - Inertness: tokens without the option prefix never mutate settings
//! - Restoration: `restore_defaults` erases any parse

use harrow_config::{parse_args, AnalysisSettings, OptionRegistry, ParseError};
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

// ============================================================================
// QuickCheck tests (simpler, faster)
// ============================================================================

#[quickcheck]
fn qc_last_boolean_write_wins(negations: Vec<bool>) -> TestResult {
    let Some(last) = negations.last().copied() else {
        return TestResult::discard();
    };

    let args: Vec<&str> = negations
        .iter()
        .map(|negate| if *negate { "-debug!" } else { "-debug" })
        .collect();

    let registry = OptionRegistry::new();
    let mut settings = AnalysisSettings::default();
    let result = parse_args(&registry, &mut settings, &args);

    TestResult::from_bool(result.is_ok() && settings.debug == !last)
}

#[quickcheck]
fn qc_int_value_round_trips(value: i32) -> bool {
    let registry = OptionRegistry::new();
    let mut settings = AnalysisSettings::default();
    let args = ["-timeout".to_string(), value.to_string()];

    parse_args(&registry, &mut settings, &args).is_ok() && settings.timeout == value
}

#[quickcheck]
fn qc_unprefixed_tokens_are_inert(tokens: Vec<String>) -> bool {
    // Strip any leading '-' so no token can be taken for an option.
    let args: Vec<String> = tokens
        .iter()
        .map(|t| t.trim_start_matches('-').to_string())
        .collect();
    if args.is_empty() {
        return true;
    }

    let registry = OptionRegistry::new();
    let mut settings = AnalysisSettings::default();
    let result = parse_args(&registry, &mut settings, &args);

    result == Ok(String::new()) && settings == AnalysisSettings::default()
}

// ============================================================================
// Proptest tests (richer input shapes)
// ============================================================================

/// A command-line fragment that always parses.
fn valid_fragment() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        prop_oneof![
            Just("debug"),
            Just("check_casts"),
            Just("sound_exceptions"),
            Just("exit_on_fail"),
        ]
        .prop_flat_map(|flag| {
            any::<bool>().prop_map(move |negate| {
                vec![format!("-{}{}", flag, if negate { "!" } else { "" })]
            })
        }),
        (prop_oneof![Just("timeout"), Just("cast"), Just("max_callstack_depth")], any::<i32>())
            .prop_map(|(name, v)| vec![format!("-{name}"), v.to_string()]),
        (prop_oneof![Just("app"), Just("lib"), Just("main_class")], "[a-zA-Z0-9/_.-]{0,12}")
            .prop_map(|(name, v)| vec![format!("-{name}"), v]),
        Just(vec!["-regressions".to_string()]),
    ]
}

proptest! {
    #[test]
    fn pt_restore_defaults_erases_any_parse(fragments in prop::collection::vec(valid_fragment(), 0..8)) {
        let args: Vec<String> = fragments.into_iter().flatten().collect();

        let registry = OptionRegistry::new();
        let mut settings = AnalysisSettings::default();
        // An empty list is a usage request; either way the reset must hold.
        let _ = parse_args(&registry, &mut settings, &args);

        registry.restore_defaults(&mut settings);
        prop_assert_eq!(settings, AnalysisSettings::default());
    }

    #[test]
    fn pt_valid_fragments_always_parse(fragments in prop::collection::vec(valid_fragment(), 1..8)) {
        let args: Vec<String> = fragments.into_iter().flatten().collect();

        let registry = OptionRegistry::new();
        let mut settings = AnalysisSettings::default();
        prop_assert!(parse_args(&registry, &mut settings, &args).is_ok());
    }

    #[test]
    fn pt_unknown_names_are_rejected(name in "[a-z]{1,12}") {
        let registry = OptionRegistry::new();
        prop_assume!(registry.lookup(&name).is_none());
        prop_assume!(name != "help" && name != "regressions");

        let mut settings = AnalysisSettings::default();
        let result = parse_args(&registry, &mut settings, &[format!("-{name}")]);

        prop_assert_eq!(result, Err(ParseError::UnrecognizedOption(name)));
        prop_assert_eq!(settings, AnalysisSettings::default());
    }

    #[test]
    fn pt_name_matching_ignores_case(mask in prop::collection::vec(any::<bool>(), 5)) {
        // Randomly re-case "debug".
        let name: String = "debug"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();

        let registry = OptionRegistry::new();
        let mut settings = AnalysisSettings::default();
        let result = parse_args(&registry, &mut settings, &[format!("-{name}")]);

        prop_assert!(result.is_ok());
        prop_assert!(settings.debug);
    }
}
