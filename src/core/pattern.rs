//! Periodic patterns. Divisor d → d slots, all empty but the last. Never materialized.

use std::num::NonZeroU64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicPattern<'a> {
    divisor: NonZeroU64,
    label: &'a str,
}

impl<'a> PeriodicPattern<'a> {
    #[inline(always)]
    pub const fn new(divisor: NonZeroU64, label: &'a str) -> Self {
        Self { divisor, label }
    }

    /// `None` for a zero divisor: no period, no pattern.
    #[inline(always)]
    pub const fn checked(divisor: u64, label: &'a str) -> Option<Self> {
        match NonZeroU64::new(divisor) {
            Some(divisor) => Some(Self::new(divisor, label)),
            None => None,
        }
    }

    #[inline(always)]
    pub const fn period(&self) -> u64 {
        self.divisor.get()
    }

    /// Value at 0-based `index`, repeating forever.
    #[inline(always)]
    pub fn at(&self, index: u64) -> &'a str {
        let d = self.divisor.get();
        if index % d == d - 1 {
            self.label
        } else {
            ""
        }
    }

    /// One period, lazily.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + Clone {
        let pattern = *self;
        (0..self.period()).map(move |i| pattern.at(i))
    }

    #[inline(always)]
    pub const fn cursor(&self) -> PatternCursor<'a> {
        PatternCursor {
            pattern: *self,
            offset: 0,
        }
    }
}

/// Per-rule position counter. Advances independently of every other rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternCursor<'a> {
    pattern: PeriodicPattern<'a>,
    offset: u64,
}

impl<'a> PatternCursor<'a> {
    /// Current value, then step one slot (wrapping at the period).
    #[inline(always)]
    pub fn advance(&mut self) -> &'a str {
        if self.offset == self.pattern.period() - 1 {
            self.offset = 0;
            self.pattern.label
        } else {
            self.offset += 1;
            ""
        }
    }

    #[inline(always)]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
