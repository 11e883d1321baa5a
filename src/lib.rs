//! Step-through engine for the Tower of Hanoi puzzle.
//!
//! # Architecture
//!
//! - **Planner**: [`plan`] enumerates the full ordered solution for a disk
//!   count as an immutable [`MoveSequence`].
//! - **Reconstructor**: [`configuration_at`] recovers the
//!   [`Configuration`] at any step by replay; [`StepCursor`] does the same
//!   incrementally, applying or undoing one move for adjacent steps.
//! - **Session**: [`PuzzleSession`] ties a planned solution to the step a
//!   viewer is currently looking at, with advance/retreat/seek operations.
//! - **Visualizer**: [`tui`] draws the towers and drives a session from
//!   key presses and timer ticks.
//!
//! Planning and reconstruction are pure, synchronous, and deterministic:
//! the same disk count always yields the same sequence, and the same step
//! always yields the same configuration.
//!
//! # Example
//!
//! ```
//! use hanoi_steps::{configuration_at, plan, Configuration};
//!
//! let sequence = plan(3)?;
//! assert_eq!(sequence.len(), 7);
//!
//! let halfway = configuration_at(&sequence, 4)?;
//! assert_eq!(halfway.disk_count(), 3);
//!
//! let done = configuration_at(&sequence, sequence.len())?;
//! assert_eq!(done, Configuration::solved(3));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod puzzle;
mod session;

// Public front-end
pub mod tui;

// Crate-level exports - domain types
pub use puzzle::types::{Configuration, Disk, Peg, PegId};

// Crate-level exports - moves
pub use puzzle::moves::{Move, MoveError};

// Crate-level exports - planning
pub use puzzle::planner::{MoveSequence, PlanError, plan};

// Crate-level exports - reconstruction
pub use puzzle::reconstructor::{StepCursor, StepError, configuration_at};

// Crate-level exports - invariants
pub use puzzle::invariants::{
    DiskConservation, Invariant, InvariantSet, InvariantViolation, OrderedPegs, PuzzleInvariants,
    assert_invariants,
};

// Crate-level exports - session management
pub use session::PuzzleSession;
