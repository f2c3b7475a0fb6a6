//! Straightforward divisibility. The reference.

use super::Labeler;

#[derive(Debug, Clone, Copy, Default)]
pub struct Branching;

impl Labeler for Branching {
    fn label(&self, n: u64) -> String {
        if n % 15 == 0 {
            "FizzBuzz".to_string()
        } else if n % 3 == 0 {
            "Fizz".to_string()
        } else if n % 5 == 0 {
            "Buzz".to_string()
        } else {
            n.to_string()
        }
    }
}
