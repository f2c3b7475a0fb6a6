//! Property-based tests for the pattern sequencer.
//!
//! Eager and lazy forms agree, strategies agree, output is periodic with
//! period lcm(divisors), and every entry matches a per-number rule scan.

use std::num::NonZeroU64;

use proptest::prelude::*;

use fizzbuzz::algebra::period::combined_period;
use fizzbuzz::algebra::proofs::{AgreementProof, DeterminismProof, PeriodicityWitness};
use fizzbuzz::core::sequencer::Strategy as Evaluation;
use fizzbuzz::labelers::{drive, Branching, Labeler, RuleScan};
use fizzbuzz::{generate, sequence, Rule, Sequencer, CLASSIC};

fn arb_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec((1u64..=12, "[A-Za-z]{0,5}"), 0..=4).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(divisor, label)| Rule::owned(divisor, label))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn classic_matches_reference(n in 1usize..=100) {
        let output = generate(&CLASSIC, n).unwrap();
        prop_assert_eq!(output.len(), n);
        prop_assert_eq!(&output[n - 1], &Branching.label(n as u64));
    }

    #[test]
    fn eager_and_lazy_agree(rules in arb_rules(), k in 0usize..200) {
        let eager = generate(&rules, k).unwrap();
        let lazy = sequence(&rules).unwrap();
        let proof = AgreementProof::verify(eager.iter().cloned(), lazy, k);
        prop_assert!(proof.is_valid(), "diverged at {:?}", proof.first_divergence);
    }

    #[test]
    fn strategies_agree(rules in arb_rules(), k in 0usize..200) {
        let modular = Sequencer::with_strategy(rules.clone(), Evaluation::Modular).unwrap();
        let cycle = Sequencer::with_strategy(rules, Evaluation::Cycle).unwrap();
        prop_assert_eq!(modular.generate(k), cycle.generate(k));
    }

    #[test]
    fn matches_rule_scan(rules in arb_rules(), k in 0usize..200) {
        let scan = RuleScan::new(&rules);
        prop_assert_eq!(generate(&rules, k).unwrap(), drive(&scan, k));
    }

    #[test]
    fn combined_label_is_periodic(rules in arb_rules()) {
        let period = combined_period(&rules).unwrap();
        let sequencer = Sequencer::with_strategy(rules, Evaluation::Modular).unwrap();
        let witness = PeriodicityWitness::verify(period, 2 * period.min(1_000), |n| {
            sequencer.combined_label(NonZeroU64::new(n).unwrap())
        });
        prop_assert!(witness.is_valid(), "mismatch at {:?}", witness.first_mismatch);
    }

    #[test]
    fn generate_is_deterministic(rules in arb_rules(), k in 0usize..100) {
        let proof = DeterminismProof::verify(|| generate(&rules, k));
        prop_assert!(proof.is_valid());
    }

    #[test]
    fn zero_divisor_anywhere_rejected(mut rules in arb_rules(), at in 0usize..5, k in 0usize..20) {
        let at = at.min(rules.len());
        rules.insert(at, Rule::new(0, "Zero"));
        let err = generate(&rules, k).unwrap_err();
        prop_assert!(err.is_invalid_argument());
        prop_assert!(sequence(&rules).is_err());
    }
}
