//! Per-number scan over an ordered rule list. No cursors, no tables.

use crate::core::rule::Rule;

use super::Labeler;

#[derive(Debug, Clone, Copy)]
pub struct RuleScan<'a> {
    rules: &'a [Rule],
}

impl<'a> RuleScan<'a> {
    pub const fn new(rules: &'a [Rule]) -> Self {
        Self { rules }
    }
}

impl Labeler for RuleScan<'_> {
    fn label(&self, n: u64) -> String {
        let label: String = self
            .rules
            .iter()
            .filter(|r| r.matches(n))
            .map(Rule::label)
            .collect();
        if label.is_empty() {
            n.to_string()
        } else {
            label
        }
    }
}
