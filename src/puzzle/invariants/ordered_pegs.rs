//! Invariant: every peg is ordered largest to smallest.

use super::Invariant;
use crate::puzzle::types::Configuration;
use tracing::warn;

/// Invariant: disk sizes strictly decrease from bottom to top on every peg.
///
/// A larger disk resting on a smaller one means an illegal move slipped
/// through.
pub struct OrderedPegs;

impl Invariant<Configuration> for OrderedPegs {
    fn holds(config: &Configuration) -> bool {
        for (index, peg) in config.pegs().iter().enumerate() {
            if !peg.is_ordered() {
                warn!(peg = index, "peg ordering violated");
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "disk sizes strictly decrease from bottom to top on every peg"
    }
}
