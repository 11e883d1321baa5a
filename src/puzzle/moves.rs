//! First-class move types for the puzzle.
//!
//! Moves are domain events, not side effects. They name a source and a
//! destination peg and can be validated, serialized for replay, and
//! inverted independently of execution.

use super::types::{Disk, PegId};
use serde::{Deserialize, Serialize};

/// A single move: lift the top disk off one peg and drop it on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: PegId,
    to: PegId,
}

impl Move {
    /// Creates a new move between two distinct pegs.
    pub fn new(from: PegId, to: PegId) -> Self {
        debug_assert!(from != to, "a move must change pegs");
        Self { from, to }
    }

    /// Returns the peg the disk is lifted from.
    pub fn from(&self) -> PegId {
        self.from
    }

    /// Returns the peg the disk lands on.
    pub fn to(&self) -> PegId {
        self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from.label(), self.to.label())
    }
}

/// Reasons a move is illegal against a given configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The source peg holds no disk.
    #[display("peg {_0} has no disk to move")]
    EmptySourcePeg(PegId),

    /// The disk would land on a smaller one.
    #[display("cannot place disk {moved} onto smaller disk {onto}")]
    LargerOntoSmaller {
        /// The disk being moved.
        moved: Disk,
        /// The smaller disk on top of the destination peg.
        onto: Disk,
    },
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(PegId::Left, PegId::Right);
        assert_eq!(mv.to_string(), "Left -> Right");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::EmptySourcePeg(PegId::Middle);
        assert_eq!(err.to_string(), "peg Middle has no disk to move");

        let err = MoveError::LargerOntoSmaller {
            moved: Disk::new(3),
            onto: Disk::new(1),
        };
        assert_eq!(err.to_string(), "cannot place disk 3 onto smaller disk 1");
    }
}
