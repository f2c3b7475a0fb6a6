//! Period algebra. Periodic patterns combine into one pattern with period lcm(d₁, …, dₖ).

pub mod period;
pub mod proofs;

pub use period::{combined_period, gcd, lcm};
pub use proofs::{AgreementProof, DeterminismProof, PeriodicityWitness};
