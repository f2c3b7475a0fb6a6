//! Proof witnesses. Runtime-verifiable properties of label sequences.

/// label(n) == label(n + period) for every n in 1..=span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicityWitness {
    pub period: u64,
    pub positions_checked: u64,
    pub first_mismatch: Option<u64>,
}

impl PeriodicityWitness {
    /// `label` should return the combined (non-numeric) label for position n.
    pub fn verify<F>(period: u64, span: u64, label: F) -> Self
    where
        F: Fn(u64) -> String,
    {
        let mut positions_checked = 0;
        let mut first_mismatch = None;

        for n in 1..=span {
            let Some(shifted) = n.checked_add(period) else {
                break;
            };
            positions_checked += 1;
            if label(n) != label(shifted) {
                first_mismatch = Some(n);
                break;
            }
        }

        Self {
            period,
            positions_checked,
            first_mismatch,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.first_mismatch.is_none()
    }
}

/// First `compared` items of two sequences agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreementProof {
    pub compared: usize,
    pub first_divergence: Option<usize>,
}

impl AgreementProof {
    /// Compares up to `k` items. A sequence ending early counts as divergence.
    pub fn verify<A, B, T>(a: A, b: B, k: usize) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
        T: PartialEq,
    {
        let mut a = a.into_iter();
        let mut b = b.into_iter();

        for index in 0..k {
            match (a.next(), b.next()) {
                (Some(x), Some(y)) if x == y => {}
                _ => {
                    return Self {
                        compared: index,
                        first_divergence: Some(index),
                    }
                }
            }
        }

        Self {
            compared: k,
            first_divergence: None,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.first_divergence.is_none()
    }
}

/// Two evaluations of the same computation produce identical output.
#[derive(Debug, Clone)]
pub struct DeterminismProof<T> {
    pub first: T,
    pub second: T,
    pub holds: bool,
}

impl<T: PartialEq> DeterminismProof<T> {
    pub fn verify<F>(eval: F) -> Self
    where
        F: Fn() -> T,
    {
        let first = eval();
        let second = eval();
        let holds = first == second;

        Self {
            first,
            second,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}
