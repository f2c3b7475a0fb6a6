//! Decimal-digit tests. Fizz: digital root in {3, 6, 9}. Buzz: last digit 0 or 5.
//! Equivalent to divisibility for n ≥ 1.

use super::Labeler;

/// Iterated digit sum until one digit remains.
pub fn digital_root(mut n: u64) -> u64 {
    while n >= 10 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

#[inline]
fn is_fizzable(n: u64) -> bool {
    matches!(digital_root(n), 3 | 6 | 9)
}

#[inline]
fn is_buzzable(n: u64) -> bool {
    matches!(n % 10, 0 | 5)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DigitTests;

impl Labeler for DigitTests {
    fn label(&self, n: u64) -> String {
        let mut label = String::new();
        if is_fizzable(n) {
            label.push_str("Fizz");
        }
        if is_buzzable(n) {
            label.push_str("Buzz");
        }
        if label.is_empty() {
            n.to_string()
        } else {
            label
        }
    }
}
