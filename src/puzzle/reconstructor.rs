//! State reconstruction: recovering the configuration at any step of a
//! planned solution.
//!
//! Two strategies, guaranteed to agree at every step: [`configuration_at`]
//! replays from the start, while [`StepCursor`] keeps the last computed
//! configuration and applies or undoes a single move when the target step
//! is adjacent, falling back to full replay otherwise.

use super::invariants::assert_invariants;
use super::planner::MoveSequence;
use super::types::Configuration;
use tracing::instrument;

/// Error from seeking a step outside the valid range.
///
/// The valid steps for a sequence of `len` moves are `0..=len`; step 0 is
/// the starting configuration and step `len` the solved one. Out-of-range
/// requests are never clamped here; clamping, if wanted, is the caller's
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StepError {
    /// The requested step exceeds the end of the solution.
    #[display("step {step} is out of range (valid steps are 0..={max})")]
    OutOfRange {
        /// The step that was requested.
        step: usize,
        /// The last valid step, equal to the sequence length.
        max: usize,
    },

    /// A backward step was requested at the starting configuration.
    #[display("cannot step back past the starting configuration")]
    BeforeStart,
}

impl std::error::Error for StepError {}

/// Replays the first `step` moves of `sequence` from the starting
/// configuration and returns the result.
///
/// # Errors
///
/// Returns [`StepError::OutOfRange`] when `step > sequence.len()`.
#[instrument(skip(sequence), fields(disk_count = sequence.disk_count()))]
pub fn configuration_at(sequence: &MoveSequence, step: usize) -> Result<Configuration, StepError> {
    if step > sequence.len() {
        return Err(StepError::OutOfRange {
            step,
            max: sequence.len(),
        });
    }

    let mut config = Configuration::initial(sequence.disk_count());
    for mv in &sequence.moves()[..step] {
        config.apply(*mv);
    }

    assert_invariants(&config);
    Ok(config)
}

/// Incremental reconstructor: caches the configuration at the last step it
/// computed.
///
/// Seeking an adjacent step applies or undoes exactly one move; any other
/// target falls back to a full replay. Either path yields the same
/// configuration [`configuration_at`] would.
#[derive(Debug, Clone)]
pub struct StepCursor {
    step: usize,
    config: Configuration,
}

impl StepCursor {
    /// Creates a cursor positioned at step 0 of `sequence`.
    pub fn new(sequence: &MoveSequence) -> Self {
        Self {
            step: 0,
            config: Configuration::initial(sequence.disk_count()),
        }
    }

    /// Returns the step this cursor is positioned at.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the configuration at the current step.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Moves the cursor to `step` and returns the configuration there.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] when `step > sequence.len()`.
    #[instrument(skip(self, sequence), fields(from = self.step, to = step))]
    pub fn seek(
        &mut self,
        sequence: &MoveSequence,
        step: usize,
    ) -> Result<&Configuration, StepError> {
        if step > sequence.len() {
            return Err(StepError::OutOfRange {
                step,
                max: sequence.len(),
            });
        }

        if step == self.step + 1 {
            // Moves are indexed by the step they depart from.
            self.config.apply(sequence.moves()[self.step]);
        } else if step + 1 == self.step {
            self.config.undo(sequence.moves()[step]);
        } else if step != self.step {
            self.config = Configuration::initial(sequence.disk_count());
            for mv in &sequence.moves()[..step] {
                self.config.apply(*mv);
            }
        }

        self.step = step;
        assert_invariants(&self.config);
        Ok(&self.config)
    }

    /// Advances the cursor one step forward.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] at the end of the solution.
    pub fn advance(&mut self, sequence: &MoveSequence) -> Result<&Configuration, StepError> {
        self.seek(sequence, self.step + 1)
    }

    /// Moves the cursor one step backward.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::BeforeStart`] at step 0.
    pub fn retreat(&mut self, sequence: &MoveSequence) -> Result<&Configuration, StepError> {
        match self.step.checked_sub(1) {
            Some(previous) => self.seek(sequence, previous),
            None => Err(StepError::BeforeStart),
        }
    }
}
