//! Cycle table: one full period of combined labels, precomputed, repeated forever.

use crate::algebra::period::combined_period;

use super::error::SequencerError;
use super::rule::{validate, Rule};

/// Table cap. Past this, precomputing costs more than it saves.
pub const MAX_CYCLE_LEN: u64 = 1 << 16;

/// Combined labels for `CLASSIC`, positions 1..=15.
pub const CLASSIC_CYCLE: [&str; 15] = [
    "", "", "Fizz", "", "Buzz", "Fizz", "", "", "Fizz", "Buzz", "", "Fizz", "", "", "FizzBuzz",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTable {
    slots: Box<[String]>,
}

impl CycleTable {
    pub fn build(rules: &[Rule], max_len: u64) -> Result<Self, SequencerError> {
        validate(rules)?;

        let period = combined_period(rules);
        let len = match period {
            Some(p) if p <= max_len => p,
            _ => {
                return Err(SequencerError::CycleTooLong {
                    period,
                    max: max_len,
                })
            }
        };

        let patterns: Vec<_> = rules.iter().filter_map(Rule::pattern).collect();
        let slots = (0..len)
            .map(|index| patterns.iter().map(|p| p.at(index)).collect::<String>())
            .collect();

        Ok(Self { slots })
    }

    /// Slot count. Always ≥ 1.
    #[inline(always)]
    pub fn period(&self) -> usize {
        self.slots.len()
    }

    /// Combined label at 0-based `slot` within the period.
    #[inline(always)]
    pub fn slot(&self, slot: usize) -> &str {
        &self.slots[slot % self.slots.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }
}
