//! Period arithmetic. Combined pattern period = lcm of all divisors.

use crate::core::rule::Rule;

#[inline]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `None` on overflow. `lcm(0, x) = 0`.
#[inline]
pub const fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Period of the combined label sequence. Empty rule list → 1.
/// `None` if any divisor is 0 or the lcm overflows `u64`.
pub fn combined_period(rules: &[Rule]) -> Option<u64> {
    rules.iter().try_fold(1u64, |acc, rule| match rule.divisor() {
        0 => None,
        d => lcm(acc, d),
    })
}
