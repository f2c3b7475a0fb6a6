//! Pattern sequencer. Combines per-rule periodic patterns positionally; empty → decimal.
//!
//! Two evaluation strategies, observably identical:
//! - `Modular`: one cursor per rule, all advanced on every pull.
//! - `Cycle`: one precomputed period (lcm of divisors), repeated.

use std::iter::FusedIterator;
use std::num::NonZeroU64;

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::algebra::period::combined_period;

use super::cycle::{CycleTable, MAX_CYCLE_LEN};
use super::error::SequencerError;
use super::pattern::PatternCursor;
use super::rule::{validate, Rule, MAX_RULES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Cycle table if the period fits `MAX_CYCLE_LEN`, cursors otherwise.
    #[default]
    Auto,
    Modular,
    /// Fails with `CycleTooLong` if the period does not fit.
    Cycle,
}

#[derive(Debug, Clone)]
pub struct Sequencer {
    rules: Vec<Rule>,
    period: Option<u64>,
    cycle: Option<CycleTable>,
}

impl Sequencer {
    #[inline]
    pub fn new(rules: impl Into<Vec<Rule>>) -> Result<Self, SequencerError> {
        Self::with_strategy(rules, Strategy::Auto)
    }

    pub fn with_strategy(
        rules: impl Into<Vec<Rule>>,
        strategy: Strategy,
    ) -> Result<Self, SequencerError> {
        let rules = rules.into();
        validate(&rules)?;

        let period = combined_period(&rules);
        let cycle = match strategy {
            Strategy::Modular => None,
            Strategy::Cycle => Some(CycleTable::build(&rules, MAX_CYCLE_LEN)?),
            Strategy::Auto => match CycleTable::build(&rules, MAX_CYCLE_LEN) {
                Ok(table) => Some(table),
                Err(err) => {
                    debug!(%err, "falling back to per-rule cursors");
                    None
                }
            },
        };

        debug!(
            rules = rules.len(),
            ?period,
            ?strategy,
            cycle = cycle.is_some(),
            "sequencer ready"
        );

        Ok(Self {
            rules,
            period,
            cycle,
        })
    }

    #[inline(always)]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Period of the combined labels. `None` if it overflows `u64`.
    #[inline(always)]
    pub const fn period(&self) -> Option<u64> {
        self.period
    }

    #[inline(always)]
    pub const fn uses_cycle_table(&self) -> bool {
        self.cycle.is_some()
    }

    /// Labels for 1..=limit.
    pub fn generate(&self, limit: usize) -> Vec<String> {
        trace!(limit, "generate");
        self.sequence().take(limit).collect()
    }

    /// Fresh lazy sequence from position 1.
    pub fn sequence(&self) -> Sequence<'_> {
        match &self.cycle {
            Some(table) => Sequence::from_table(table),
            None => Sequence::from_rules(&self.rules),
        }
    }

    /// Concatenated labels of every rule at position `n`. Empty if none match.
    pub fn combined_label(&self, n: NonZeroU64) -> String {
        let index = n.get() - 1;
        match &self.cycle {
            Some(table) => {
                let slot = (index % table.period() as u64) as usize;
                table.slot(slot).to_string()
            }
            None => self
                .rules
                .iter()
                .filter_map(Rule::pattern)
                .map(|p| p.at(index))
                .collect(),
        }
    }

    /// Output entry for position `n`, without walking 1..n.
    pub fn label_at(&self, n: NonZeroU64) -> String {
        let label = self.combined_label(n);
        if label.is_empty() {
            n.to_string()
        } else {
            label
        }
    }
}

/// Eager form: labels for 1..=limit, or an error before any work is done.
pub fn generate(rules: &[Rule], limit: usize) -> Result<Vec<String>, SequencerError> {
    Ok(Sequencer::new(rules)?.generate(limit))
}

/// Lazy form over borrowed rules. Infinite; the consumer decides where to stop.
pub fn sequence(rules: &[Rule]) -> Result<Sequence<'_>, SequencerError> {
    validate(rules)?;
    Ok(Sequence::from_rules(rules))
}

#[derive(Debug, Clone)]
enum Source<'a> {
    Cursors(ArrayVec<PatternCursor<'a>, MAX_RULES>),
    Table { table: &'a CycleTable, slot: usize },
}

/// Lazy, restartable label stream. Position n is 1-based.
#[derive(Debug, Clone)]
pub struct Sequence<'a> {
    source: Source<'a>,
    position: u64,
}

impl<'a> Sequence<'a> {
    /// Rules must already be validated.
    fn from_rules(rules: &'a [Rule]) -> Self {
        let cursors = rules
            .iter()
            .filter_map(Rule::pattern)
            .map(|p| p.cursor())
            .collect();
        Self {
            source: Source::Cursors(cursors),
            position: 0,
        }
    }

    fn from_table(table: &'a CycleTable) -> Self {
        Self {
            source: Source::Table { table, slot: 0 },
            position: 0,
        }
    }

    /// Last emitted position. 0 before the first pull.
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Back to position 1.
    pub fn restart(&mut self) {
        self.position = 0;
        match &mut self.source {
            Source::Cursors(cursors) => cursors.iter_mut().for_each(PatternCursor::reset),
            Source::Table { slot, .. } => *slot = 0,
        }
    }
}

impl Iterator for Sequence<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let n = self.position.checked_add(1)?;
        self.position = n;

        let label = match &mut self.source {
            Source::Cursors(cursors) => {
                let mut label = String::new();
                for cursor in cursors.iter_mut() {
                    label.push_str(cursor.advance());
                }
                label
            }
            Source::Table { table, slot } => {
                let label = table.slot(*slot).to_string();
                *slot = (*slot + 1) % table.period();
                label
            }
        };

        Some(if label.is_empty() {
            n.to_string()
        } else {
            label
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = u64::MAX - self.position;
        match usize::try_from(remaining) {
            Ok(r) => (r, Some(r)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Sequence<'_> {}
