//! Single-number labelers. Each maps one n ≥ 1 to its output entry.
//!
//! These are independent restatements of the rule, used as oracles against
//! the sequencer.

pub mod branching;
pub mod digits;
pub mod scan;

pub use branching::Branching;
pub use digits::{digital_root, DigitTests};
pub use scan::RuleScan;

pub trait Labeler {
    fn label(&self, n: u64) -> String;
}

impl<F> Labeler for F
where
    F: Fn(u64) -> String,
{
    #[inline(always)]
    fn label(&self, n: u64) -> String {
        self(n)
    }
}

/// Labels 1..=limit.
pub fn drive<L: Labeler + ?Sized>(labeler: &L, limit: usize) -> Vec<String> {
    (1..=limit as u64).map(|n| labeler.label(n)).collect()
}
