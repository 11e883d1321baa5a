//! Application state and logic for the visualizer.

use super::input::Action;
use crate::puzzle::planner::PlanError;
use crate::session::PuzzleSession;
use std::time::Duration;
use tracing::debug;

/// Fastest allowed auto-play interval.
const MIN_TICK: Duration = Duration::from_millis(100);
/// Slowest allowed auto-play interval.
const MAX_TICK: Duration = Duration::from_secs(5);

/// Main application state.
pub struct App {
    session: PuzzleSession,
    auto_play: bool,
    tick: Duration,
    status: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application for `disk_count` disks.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidDiskCount`] when `disk_count` is zero.
    pub fn new(disk_count: u32, tick: Duration) -> Result<Self, PlanError> {
        let session = PuzzleSession::new(disk_count)?;
        let status = format!(
            "{} disks, {} moves. Press space to play.",
            session.disk_count(),
            session.move_count()
        );
        Ok(Self {
            session,
            auto_play: false,
            tick: tick.clamp(MIN_TICK, MAX_TICK),
            status,
            should_quit: false,
        })
    }

    /// Returns the current session.
    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    /// Returns the current auto-play interval.
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Checks if auto-play is running.
    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    /// Returns the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Checks if the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a bound key action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::StepForward => {
                self.auto_play = false;
                self.step_forward();
            }
            Action::StepBack => {
                self.auto_play = false;
                self.step_back();
            }
            Action::JumpToStart => {
                self.auto_play = false;
                if self.session.seek(0).is_ok() {
                    self.status = "Back at the start.".to_string();
                }
            }
            Action::JumpToEnd => {
                self.auto_play = false;
                let last = self.session.move_count();
                if self.session.seek(last).is_ok() {
                    self.status = format!("Solved in {last} moves.");
                }
            }
            Action::ToggleAutoPlay => {
                if self.session.is_solved() {
                    self.status = "Already solved. Press r to restart.".to_string();
                } else {
                    self.auto_play = !self.auto_play;
                    self.status = if self.auto_play {
                        format!("Playing, one move every {} ms.", self.tick.as_millis())
                    } else {
                        "Paused.".to_string()
                    };
                }
            }
            Action::SpeedUp => {
                self.tick = (self.tick / 2).clamp(MIN_TICK, MAX_TICK);
                self.status = format!("Auto-play interval: {} ms.", self.tick.as_millis());
            }
            Action::SlowDown => {
                self.tick = (self.tick * 2).clamp(MIN_TICK, MAX_TICK);
                self.status = format!("Auto-play interval: {} ms.", self.tick.as_millis());
            }
            Action::Restart => self.restart(self.session.disk_count()),
            Action::SetDiskCount(count) => self.restart(count),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Advances one step on each timer tick while auto-play is running,
    /// stopping at the solved configuration.
    pub fn on_tick(&mut self) {
        if !self.auto_play {
            return;
        }
        self.step_forward();
        if self.session.is_solved() {
            self.auto_play = false;
        }
    }

    fn step_forward(&mut self) {
        // Bounds are checked here rather than surfacing a range error:
        // stopping at either end is presentation policy, not the engine's.
        if self.session.is_solved() {
            self.status = "Already solved. Press r to restart.".to_string();
            return;
        }
        if self.session.advance().is_ok() {
            self.describe_position();
        }
    }

    fn step_back(&mut self) {
        if self.session.at_start() {
            self.status = "Already at the start.".to_string();
            return;
        }
        if self.session.retreat().is_ok() {
            self.describe_position();
        }
    }

    fn restart(&mut self, disk_count: u32) {
        self.auto_play = false;
        match self.session.restart(disk_count) {
            Ok(()) => {
                self.status = format!(
                    "{} disks, {} moves. Press space to play.",
                    self.session.disk_count(),
                    self.session.move_count()
                );
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn describe_position(&mut self) {
        let step = self.session.current_step();
        let total = self.session.move_count();
        self.status = match self.session.last_move() {
            Some(mv) => format!("Move {step} of {total}: {mv}"),
            None => "Back at the start.".to_string(),
        };
    }
}
