//! Core domain types for the puzzle: disks, pegs, and configurations.

use super::moves::{Move, MoveError};
use serde::{Deserialize, Serialize};

/// A single disk, identified by its physical size.
///
/// Sizes run from 1 (smallest) to the puzzle's disk count (largest).
/// Disks are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disk(u32);

impl Disk {
    /// Creates a disk of the given size.
    pub fn new(size: u32) -> Self {
        Self(size)
    }

    /// Returns the physical size of this disk.
    pub fn size(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three pegs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum PegId {
    /// The left peg. All disks start here.
    Left,
    /// The middle peg, used as the auxiliary.
    Middle,
    /// The right peg, the destination.
    Right,
}

impl PegId {
    /// All three pegs, left to right.
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Returns the display label for this peg.
    pub fn label(&self) -> &'static str {
        match self {
            PegId::Left => "Left",
            PegId::Middle => "Middle",
            PegId::Right => "Right",
        }
    }

    /// Converts this peg to its index (0-2), left to right.
    pub fn index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Middle => 1,
            PegId::Right => 2,
        }
    }

    /// Creates a peg from an index (0-2).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PegId::Left),
            1 => Some(PegId::Middle),
            2 => Some(PegId::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A stack of disks on one peg.
///
/// Disks are stored bottom first, so the top of the stack is the last
/// element. Sizes are strictly decreasing from bottom to top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peg {
    disks: Vec<Disk>,
}

impl Peg {
    /// Creates an empty peg.
    pub fn new() -> Self {
        Self { disks: Vec::new() }
    }

    /// Returns the disks on this peg, bottom first.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Returns the top disk, if any.
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Returns the number of disks on this peg.
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Checks if this peg holds no disks.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Checks that disk sizes strictly decrease from bottom to top.
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0].size() > pair[1].size())
    }

    pub(crate) fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }
}

/// The complete state of the puzzle: three pegs and the disk count they
/// were built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pegs: [Peg; 3],
    disk_count: u32,
}

impl Configuration {
    /// Creates the starting configuration: all disks on the left peg,
    /// largest at the bottom.
    pub fn initial(disk_count: u32) -> Self {
        let mut start = Peg::new();
        for size in (1..=disk_count).rev() {
            start.push(Disk::new(size));
        }
        Self {
            pegs: [start, Peg::new(), Peg::new()],
            disk_count,
        }
    }

    /// Creates the solved configuration: all disks on the right peg,
    /// largest at the bottom.
    pub fn solved(disk_count: u32) -> Self {
        let mut dest = Peg::new();
        for size in (1..=disk_count).rev() {
            dest.push(Disk::new(size));
        }
        Self {
            pegs: [Peg::new(), Peg::new(), dest],
            disk_count,
        }
    }

    /// Returns the disk count this configuration was built for.
    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    /// Returns the peg with the given id.
    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    /// Returns all three pegs, left to right.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Checks whether a move is legal here: the source peg holds a disk,
    /// and the destination is empty or topped by a larger disk.
    pub fn check_move(&self, mv: Move) -> Result<(), MoveError> {
        let Some(moved) = self.peg(mv.from()).top() else {
            return Err(MoveError::EmptySourcePeg(mv.from()));
        };
        if let Some(onto) = self.peg(mv.to()).top()
            && moved.size() > onto.size()
        {
            return Err(MoveError::LargerOntoSmaller { moved, onto });
        }
        Ok(())
    }

    /// Applies a move: pops the top disk from the source peg and pushes it
    /// onto the destination peg.
    ///
    /// Does not validate legality; callers feed moves from a planned
    /// sequence, which are legal by construction. Use [`Self::check_move`]
    /// to validate arbitrary moves first.
    pub fn apply(&mut self, mv: Move) {
        debug_assert!(self.check_move(mv).is_ok(), "illegal move {mv}");
        if let Some(disk) = self.pegs[mv.from().index()].pop() {
            self.pegs[mv.to().index()].push(disk);
        }
    }

    /// Undoes a move: pops the top disk from the move's destination peg and
    /// pushes it back onto the source peg.
    ///
    /// This is the exact inverse of [`Self::apply`] and restores the prior
    /// configuration disk for disk.
    pub fn undo(&mut self, mv: Move) {
        if let Some(disk) = self.pegs[mv.to().index()].pop() {
            self.pegs[mv.from().index()].push(disk);
        }
    }
}
