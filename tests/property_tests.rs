//! Property-based tests for the scan and emit passes.
//!
//! These tests use proptest to verify the output contract across many randomly
//! generated inputs: one block per startup, discovery order preserved, and
//! byte-identical re-emission.

use extgen::{CandidateDescriptor, StartupType, generate_executor, scan};
use proptest::prelude::*;

fn startup_list(len: impl Into<proptest::collection::SizeRange>) -> impl Strategy<Value = Vec<StartupType>> {
    proptest::collection::vec("[a-z][a-z0-9_]{0,8}::[A-Z][A-Za-z0-9]{0,8}", len).prop_map(|paths| {
        // Distinct paths keep the order/exclusion assertions unambiguous.
        paths
            .into_iter()
            .enumerate()
            .map(|(i, p)| StartupType {
                type_path: format!("{p}{i}"),
            })
            .collect()
    })
}

fn candidates_from_facts(facts: &[(bool, bool)]) -> Vec<CandidateDescriptor> {
    facts
        .iter()
        .enumerate()
        .map(|(i, &(implements_startup, has_default_constructor))| CandidateDescriptor {
            type_path: format!("pkg{i}::Startup{i}"),
            implements_startup,
            has_default_constructor,
        })
        .collect()
}

proptest! {
    #[test]
    fn emission_is_deterministic(startups in startup_list(1..8)) {
        let first = generate_executor(&startups);
        let second = generate_executor(&startups);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_isolated_block_per_startup_in_input_order(startups in startup_list(1..10)) {
        let artifact = generate_executor(&startups);
        prop_assert!(artifact.is_some());
        let source = artifact.map(|a| a.source).unwrap_or_default();

        prop_assert_eq!(source.matches("catch_unwind").count(), startups.len());

        let mut cursor = 0;
        for startup in &startups {
            let needle = format!("let startup = <{} as", startup.type_path);
            let found = source[cursor..].find(&needle);
            prop_assert!(found.is_some(), "missing block for {}", startup.type_path);
            cursor += found.unwrap_or(0) + needle.len();
        }
    }

    #[test]
    fn scan_partitions_candidates_without_dropping_any(facts in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..12)) {
        let candidates = candidates_from_facts(&facts);
        let outcome = scan(&candidates);

        let expected_valid = facts.iter().filter(|&&(a, b)| a && b).count();
        let expected_violations: usize = facts
            .iter()
            .map(|&(a, b)| usize::from(!a) + usize::from(!b))
            .sum();

        prop_assert_eq!(outcome.startups.len(), expected_valid);
        prop_assert_eq!(outcome.violations.len(), expected_violations);
    }

    #[test]
    fn invalid_candidates_never_reach_the_emitted_source(facts in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..12)) {
        let candidates = candidates_from_facts(&facts);
        let outcome = scan(&candidates);
        let source = generate_executor(&outcome.startups)
            .map(|a| a.source)
            .unwrap_or_default();

        for candidate in &candidates {
            let valid = candidate.implements_startup && candidate.has_default_constructor;
            prop_assert_eq!(source.contains(&candidate.type_path), valid);
        }
    }
}
