//! Key mapping for the visualizer.

use crossterm::event::KeyCode;

/// What the user asked the visualizer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply the next move.
    StepForward,
    /// Undo the last move.
    StepBack,
    /// Jump to the starting configuration.
    JumpToStart,
    /// Jump to the solved configuration.
    JumpToEnd,
    /// Start or stop auto-play.
    ToggleAutoPlay,
    /// Halve the auto-play interval.
    SpeedUp,
    /// Double the auto-play interval.
    SlowDown,
    /// Restart the current puzzle from step 0.
    Restart,
    /// Restart with a different disk count.
    SetDiskCount(u32),
    /// Leave the visualizer.
    Quit,
}

/// Maps a key press to an action, if it is bound to one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Right | KeyCode::Char('l') => Some(Action::StepForward),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::StepBack),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::JumpToStart),
        KeyCode::End | KeyCode::Char('G') => Some(Action::JumpToEnd),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Action::ToggleAutoPlay),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::SpeedUp),
        KeyCode::Char('-') => Some(Action::SlowDown),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(count) if count >= 1 => Some(Action::SetDiskCount(count)),
            _ => None,
        },
        _ => None,
    }
}
