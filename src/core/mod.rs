//! The guts. Rules, periodic patterns, cycle tables, the sequencer.

pub mod cycle;
pub mod error;
pub mod pattern;
pub mod rule;
pub mod sequencer;

pub use cycle::{CycleTable, CLASSIC_CYCLE, MAX_CYCLE_LEN};
pub use error::SequencerError;
pub use pattern::{PatternCursor, PeriodicPattern};
pub use rule::{validate, Rule, BUZZ, CLASSIC, FIZZ, MAX_RULES};
pub use sequencer::{generate, sequence, Sequence, Sequencer, Strategy};
