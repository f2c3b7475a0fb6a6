#![deny(unsafe_code)]

pub mod algebra;
pub mod core;
pub mod labelers;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::core::{
        generate, sequence, Rule, Sequence, Sequencer, SequencerError, Strategy, BUZZ, CLASSIC,
        FIZZ,
    };
    pub use crate::labelers::{drive, Labeler};
}

// Re-export primary types at crate root for convenience.
pub use crate::core::{
    generate, sequence, CycleTable, PatternCursor, PeriodicPattern, Rule, Sequence, Sequencer,
    SequencerError, Strategy, BUZZ, CLASSIC, FIZZ, MAX_CYCLE_LEN, MAX_RULES,
};
