//! Tests for state reconstruction.

use hanoi_steps::{
    Configuration, DiskConservation, Invariant, OrderedPegs, PegId, StepCursor, StepError,
    configuration_at, plan,
};

fn sizes(config: &Configuration, id: PegId) -> Vec<u32> {
    config.peg(id).disks().iter().map(|d| d.size()).collect()
}

#[test]
fn test_step_zero_is_the_initial_configuration() {
    for disk_count in 1..=6 {
        let sequence = plan(disk_count).expect("valid disk count");
        let config = configuration_at(&sequence, 0).expect("step in range");
        assert_eq!(config, Configuration::initial(disk_count));
    }
}

#[test]
fn test_last_step_is_the_solved_configuration() {
    for disk_count in 1..=6 {
        let sequence = plan(disk_count).expect("valid disk count");
        let config = configuration_at(&sequence, sequence.len()).expect("step in range");
        assert_eq!(config, Configuration::solved(disk_count));
    }
}

#[test]
fn test_one_disk_steps() {
    let sequence = plan(1).expect("valid disk count");

    let start = configuration_at(&sequence, 0).expect("step in range");
    assert_eq!(sizes(&start, PegId::Left), vec![1]);
    assert!(start.peg(PegId::Middle).is_empty());
    assert!(start.peg(PegId::Right).is_empty());

    let done = configuration_at(&sequence, 1).expect("step in range");
    assert!(done.peg(PegId::Left).is_empty());
    assert!(done.peg(PegId::Middle).is_empty());
    assert_eq!(sizes(&done, PegId::Right), vec![1]);
}

#[test]
fn test_two_disks_midway() {
    let sequence = plan(2).expect("valid disk count");
    let config = configuration_at(&sequence, 2).expect("step in range");

    assert!(config.peg(PegId::Left).is_empty());
    assert_eq!(sizes(&config, PegId::Middle), vec![1]);
    assert_eq!(sizes(&config, PegId::Right), vec![2]);
}

#[test]
fn test_three_disks_final_stack_order() {
    let sequence = plan(3).expect("valid disk count");
    let config = configuration_at(&sequence, 7).expect("step in range");
    assert_eq!(sizes(&config, PegId::Right), vec![3, 2, 1]);
}

#[test]
fn test_out_of_range_is_an_error_not_a_clamp() {
    let sequence = plan(2).expect("valid disk count");
    assert_eq!(
        configuration_at(&sequence, 4),
        Err(StepError::OutOfRange { step: 4, max: 3 })
    );
}

#[test]
fn test_reconstruction_is_deterministic() {
    let sequence = plan(4).expect("valid disk count");
    assert_eq!(
        configuration_at(&sequence, 9),
        configuration_at(&sequence, 9)
    );
}

#[test]
fn test_cursor_matches_replay_at_every_step() {
    let sequence = plan(5).expect("valid disk count");
    let mut cursor = StepCursor::new(&sequence);

    for step in 0..=sequence.len() {
        let seeked = cursor.seek(&sequence, step).expect("step in range").clone();
        let replayed = configuration_at(&sequence, step).expect("step in range");
        assert_eq!(seeked, replayed, "divergence at step {step}");
    }
}

#[test]
fn test_cursor_backward_walk_has_no_drift() {
    let sequence = plan(4).expect("valid disk count");
    let mut cursor = StepCursor::new(&sequence);

    cursor.seek(&sequence, sequence.len()).expect("step in range");
    for step in (0..=sequence.len()).rev() {
        let seeked = cursor.seek(&sequence, step).expect("step in range").clone();
        let replayed = configuration_at(&sequence, step).expect("step in range");
        assert_eq!(seeked, replayed, "drift at step {step}");
    }
    assert_eq!(cursor.configuration(), &Configuration::initial(4));
}

#[test]
fn test_cursor_random_access_falls_back_to_replay() {
    let sequence = plan(5).expect("valid disk count");
    let mut cursor = StepCursor::new(&sequence);

    for step in [13, 2, 31, 0, 22, 22, 7] {
        let seeked = cursor.seek(&sequence, step).expect("step in range").clone();
        let replayed = configuration_at(&sequence, step).expect("step in range");
        assert_eq!(seeked, replayed, "divergence at step {step}");
    }
}

#[test]
fn test_cursor_rejects_out_of_range_and_keeps_position() {
    let sequence = plan(3).expect("valid disk count");
    let mut cursor = StepCursor::new(&sequence);
    cursor.seek(&sequence, 5).expect("step in range");

    assert!(cursor.seek(&sequence, 8).is_err());
    assert_eq!(cursor.step(), 5);
}

#[test]
fn test_invariants_hold_at_every_step() {
    for disk_count in 1..=7 {
        let sequence = plan(disk_count).expect("valid disk count");
        for step in 0..=sequence.len() {
            let config = configuration_at(&sequence, step).expect("step in range");
            assert!(OrderedPegs::holds(&config), "ordering broken at step {step}");
            assert!(
                DiskConservation::holds(&config),
                "conservation broken at step {step}"
            );
        }
    }
}
