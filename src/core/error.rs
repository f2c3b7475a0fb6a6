//! Why the sequencer said no.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequencerError {
    /// A rule with divisor 0 has no period. Rejected before any pattern is built.
    #[error("rule {index} ({label:?}) has divisor 0")]
    ZeroDivisor { index: usize, label: String },

    /// More rules than the cursor storage can hold.
    #[error("{count} rules exceed the maximum of {max}")]
    TooManyRules { count: usize, max: usize },

    /// Combined period overflowed `u64` (`period: None`) or exceeds the table cap.
    #[error("cycle period {period:?} exceeds the maximum table length {max}")]
    CycleTooLong { period: Option<u64>, max: u64 },
}

impl SequencerError {
    /// Caller passed bad input, as opposed to asking for an oversized cycle table.
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SequencerError::ZeroDivisor { .. } | SequencerError::TooManyRules { .. }
        )
    }
}
