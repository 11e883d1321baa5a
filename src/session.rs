//! Per-session puzzle state.
//!
//! Each viewing session owns its disk count, its planned solution, and the
//! step it is currently looking at. Sessions are fully isolated from one
//! another; nothing here is shared or locked.

use crate::puzzle::moves::Move;
use crate::puzzle::planner::{MoveSequence, PlanError, plan};
use crate::puzzle::reconstructor::{StepCursor, StepError};
use crate::puzzle::types::Configuration;
use tracing::{debug, info, instrument};

/// A single viewing session: one puzzle, one position in its solution.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    disk_count: u32,
    moves: MoveSequence,
    cursor: StepCursor,
}

impl PuzzleSession {
    /// Creates a session for `disk_count` disks, positioned at step 0.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidDiskCount`] when `disk_count` is zero.
    #[instrument]
    pub fn new(disk_count: u32) -> Result<Self, PlanError> {
        let moves = plan(disk_count)?;
        info!(disk_count, move_count = moves.len(), "Planned new puzzle session");
        let cursor = StepCursor::new(&moves);
        Ok(Self {
            disk_count,
            moves,
            cursor,
        })
    }

    /// Returns the disk count of this session's puzzle.
    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    /// Returns the total number of moves in the solution.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the planned solution.
    pub fn moves(&self) -> &MoveSequence {
        &self.moves
    }

    /// Returns the step currently being viewed.
    pub fn current_step(&self) -> usize {
        self.cursor.step()
    }

    /// Returns the configuration at the current step.
    pub fn configuration(&self) -> &Configuration {
        self.cursor.configuration()
    }

    /// Returns the move that produced the current configuration, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.cursor.step().checked_sub(1).and_then(|i| self.moves.get(i))
    }

    /// Returns the move that the next forward step will apply, if any.
    pub fn next_move(&self) -> Option<Move> {
        self.moves.get(self.cursor.step())
    }

    /// Checks if the session is at step 0.
    pub fn at_start(&self) -> bool {
        self.cursor.step() == 0
    }

    /// Checks if the session is at the final step.
    pub fn is_solved(&self) -> bool {
        self.cursor.step() == self.moves.len()
    }

    /// Steps one move forward.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] when already at the final step.
    #[instrument(skip(self), fields(step = self.cursor.step()))]
    pub fn advance(&mut self) -> Result<(), StepError> {
        self.cursor.advance(&self.moves)?;
        debug!(step = self.cursor.step(), "Advanced");
        Ok(())
    }

    /// Steps one move backward.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::BeforeStart`] when already at step 0.
    #[instrument(skip(self), fields(step = self.cursor.step()))]
    pub fn retreat(&mut self) -> Result<(), StepError> {
        self.cursor.retreat(&self.moves)?;
        debug!(step = self.cursor.step(), "Retreated");
        Ok(())
    }

    /// Jumps to an arbitrary step.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] when `step` exceeds the final step.
    #[instrument(skip(self))]
    pub fn seek(&mut self, step: usize) -> Result<(), StepError> {
        self.cursor.seek(&self.moves, step)?;
        Ok(())
    }

    /// Replaces the puzzle with a fresh one of `disk_count` disks.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidDiskCount`] when `disk_count` is zero;
    /// the session is left untouched in that case.
    #[instrument(skip(self))]
    pub fn restart(&mut self, disk_count: u32) -> Result<(), PlanError> {
        *self = Self::new(disk_count)?;
        Ok(())
    }
}
