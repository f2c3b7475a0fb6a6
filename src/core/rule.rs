//! Rules: immutable (divisor, label) pairs. Order of the list = order of concatenation.

use std::borrow::Cow;

use tracing::warn;

use super::error::SequencerError;
use super::pattern::PeriodicPattern;

/// Cursor storage is fixed-size. Keeps per-pull work bounded.
pub const MAX_RULES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    divisor: u64,
    label: Cow<'static, str>,
}

impl Rule {
    #[inline(always)]
    pub const fn new(divisor: u64, label: &'static str) -> Self {
        Self {
            divisor,
            label: Cow::Borrowed(label),
        }
    }

    /// Rule with a label built at runtime.
    pub fn owned(divisor: u64, label: impl Into<String>) -> Self {
        Self {
            divisor,
            label: Cow::Owned(label.into()),
        }
    }

    #[inline(always)]
    pub const fn divisor(&self) -> u64 {
        self.divisor
    }

    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// `n % divisor == 0`. A zero divisor matches nothing.
    #[inline(always)]
    pub const fn matches(&self, n: u64) -> bool {
        self.divisor != 0 && n % self.divisor == 0
    }

    /// `None` for a zero divisor. `validate` rejects those with `ZeroDivisor`.
    #[inline(always)]
    pub fn pattern(&self) -> Option<PeriodicPattern<'_>> {
        PeriodicPattern::checked(self.divisor, &self.label)
    }
}

pub const FIZZ: Rule = Rule::new(3, "Fizz");
pub const BUZZ: Rule = Rule::new(5, "Buzz");

/// The exercise: Fizz before Buzz.
pub const CLASSIC: [Rule; 2] = [FIZZ, BUZZ];

/// Reject the whole list or accept it. Nothing downstream sees a bad rule.
pub fn validate(rules: &[Rule]) -> Result<(), SequencerError> {
    if rules.len() > MAX_RULES {
        warn!(count = rules.len(), max = MAX_RULES, "rule list rejected");
        return Err(SequencerError::TooManyRules {
            count: rules.len(),
            max: MAX_RULES,
        });
    }

    if let Some((index, rule)) = rules.iter().enumerate().find(|(_, r)| r.divisor == 0) {
        warn!(index, label = rule.label(), "rule with zero divisor rejected");
        return Err(SequencerError::ZeroDivisor {
            index,
            label: rule.label().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_rules() {
        assert_eq!(CLASSIC[0].divisor(), 3);
        assert_eq!(CLASSIC[0].label(), "Fizz");
        assert_eq!(CLASSIC[1].divisor(), 5);
        assert_eq!(CLASSIC[1].label(), "Buzz");
    }

    #[test]
    fn test_owned_equals_borrowed() {
        assert_eq!(Rule::owned(3, String::from("Fizz")), FIZZ);
    }

    #[test]
    fn test_matches() {
        assert!(FIZZ.matches(9));
        assert!(!FIZZ.matches(10));
        assert!(BUZZ.matches(10));
        assert!(!Rule::new(0, "Never").matches(0));
        assert!(!Rule::new(0, "Never").matches(7));
    }

    #[test]
    fn test_zero_divisor_rule_yields_no_pattern() {
        let zero = Rule::new(0, "Zero");
        assert!(zero.pattern().is_none());
        assert!(validate(std::slice::from_ref(&zero)).is_err());

        let fizz = FIZZ;
        let pattern = fizz.pattern().unwrap();
        assert_eq!(pattern.at(5), "Fizz");
        assert_eq!(pattern.cursor().advance(), "");
    }

    #[test]
    fn test_validate_accepts_empty_and_classic() {
        assert!(validate(&[]).is_ok());
        assert!(validate(&CLASSIC).is_ok());
    }

    #[test]
    fn test_validate_reports_first_zero_divisor() {
        let rules = [FIZZ, Rule::new(0, "Zap"), Rule::new(0, "Zop")];
        assert_eq!(
            validate(&rules),
            Err(SequencerError::ZeroDivisor {
                index: 1,
                label: "Zap".to_string()
            })
        );
    }

    #[test]
    fn test_validate_too_many_rules() {
        let rules: Vec<Rule> = (1..=MAX_RULES as u64 + 1)
            .map(|d| Rule::owned(d, "x"))
            .collect();
        assert_eq!(
            validate(&rules),
            Err(SequencerError::TooManyRules {
                count: MAX_RULES + 1,
                max: MAX_RULES
            })
        );
        assert!(validate(&rules[..MAX_RULES]).is_ok());
    }
}
