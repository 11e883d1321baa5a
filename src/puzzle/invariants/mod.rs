//! First-class invariants for the puzzle.
//!
//! Invariants are logical properties that must hold for every reachable
//! configuration. They are testable independently and serve as
//! documentation of the engine's guarantees.

mod disk_conservation;
mod ordered_pegs;

pub use disk_conservation::DiskConservation;
pub use ordered_pegs::OrderedPegs;

use super::types::Configuration;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The invariants every reachable configuration must satisfy.
pub type PuzzleInvariants = (OrderedPegs, DiskConservation);

/// Asserts that all configuration invariants hold (debug builds only).
pub fn assert_invariants(config: &Configuration) {
    debug_assert!(
        OrderedPegs::holds(config),
        "peg ordering violated at disk count {}",
        config.disk_count()
    );
    debug_assert!(
        DiskConservation::holds(config),
        "disk conservation violated at disk count {}",
        config.disk_count()
    );
}
