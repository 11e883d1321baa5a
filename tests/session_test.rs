//! Tests for the per-session state layer.

use hanoi_steps::{Configuration, PuzzleSession, StepError};

#[test]
fn test_full_walk_forward_and_back() {
    let mut session = PuzzleSession::new(4).expect("valid disk count");

    while !session.is_solved() {
        session.advance().expect("step in range");
    }
    assert_eq!(session.current_step(), 15);
    assert_eq!(session.configuration(), &Configuration::solved(4));

    while !session.at_start() {
        session.retreat().expect("step in range");
    }
    assert_eq!(session.configuration(), &Configuration::initial(4));
}

#[test]
fn test_advance_past_the_end_is_an_error() {
    let mut session = PuzzleSession::new(1).expect("valid disk count");
    session.advance().expect("step in range");
    assert!(session.is_solved());

    assert_eq!(
        session.advance(),
        Err(StepError::OutOfRange { step: 2, max: 1 })
    );
    // Position is unchanged after the failed step.
    assert_eq!(session.current_step(), 1);
}

#[test]
fn test_retreat_past_the_start_is_an_error() {
    let mut session = PuzzleSession::new(3).expect("valid disk count");
    assert_eq!(session.retreat(), Err(StepError::BeforeStart));
    assert_eq!(session.current_step(), 0);
}

#[test]
fn test_seek_is_independent_of_path() {
    let mut walked = PuzzleSession::new(4).expect("valid disk count");
    for _ in 0..9 {
        walked.advance().expect("step in range");
    }

    let mut jumped = PuzzleSession::new(4).expect("valid disk count");
    jumped.seek(9).expect("step in range");

    assert_eq!(walked.configuration(), jumped.configuration());
}

#[test]
fn test_next_and_last_move_bracket_the_current_step() {
    let mut session = PuzzleSession::new(2).expect("valid disk count");
    assert_eq!(session.last_move(), None);

    let first = session.next_move().expect("moves remain");
    session.advance().expect("step in range");
    assert_eq!(session.last_move(), Some(first));

    session.seek(session.move_count()).expect("step in range");
    assert_eq!(session.next_move(), None);
}

#[test]
fn test_sessions_are_isolated() {
    let mut one = PuzzleSession::new(3).expect("valid disk count");
    let two = PuzzleSession::new(3).expect("valid disk count");

    one.seek(5).expect("step in range");
    assert_eq!(two.current_step(), 0);
    assert_eq!(two.configuration(), &Configuration::initial(3));
}
