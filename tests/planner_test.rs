//! Tests for the move planner.

use hanoi_steps::{Configuration, Move, PegId, PlanError, plan};

#[test]
fn test_move_count_is_minimal() {
    for disk_count in 1..=10 {
        let sequence = plan(disk_count).expect("valid disk count");
        assert_eq!(
            sequence.len(),
            (1usize << disk_count) - 1,
            "wrong move count for {disk_count} disks"
        );
        assert_eq!(sequence.disk_count(), disk_count);
    }
}

#[test]
fn test_every_planned_move_is_legal_when_applied() {
    for disk_count in 1..=8 {
        let sequence = plan(disk_count).expect("valid disk count");
        let mut config = Configuration::initial(disk_count);

        for (step, mv) in sequence.iter().enumerate() {
            config
                .check_move(mv)
                .unwrap_or_else(|e| panic!("illegal move at step {step} for {disk_count} disks: {e}"));
            config.apply(mv);
        }

        assert_eq!(config, Configuration::solved(disk_count));
    }
}

#[test]
fn test_one_disk() {
    let sequence = plan(1).expect("valid disk count");
    assert_eq!(sequence.moves(), &[Move::new(PegId::Left, PegId::Right)]);
}

#[test]
fn test_two_disks() {
    let sequence = plan(2).expect("valid disk count");
    assert_eq!(
        sequence.moves(),
        &[
            Move::new(PegId::Left, PegId::Middle),
            Move::new(PegId::Left, PegId::Right),
            Move::new(PegId::Middle, PegId::Right),
        ]
    );
}

#[test]
fn test_three_disks_has_seven_moves() {
    let sequence = plan(3).expect("valid disk count");
    assert_eq!(sequence.len(), 7);
}

#[test]
fn test_zero_disks_is_invalid() {
    assert_eq!(plan(0), Err(PlanError::InvalidDiskCount(0)));
}

#[test]
fn test_plan_is_deterministic() {
    let first = plan(6).expect("valid disk count");
    let second = plan(6).expect("valid disk count");
    assert_eq!(first, second);
}

#[test]
fn test_moves_serialize_for_replay() {
    let sequence = plan(3).expect("valid disk count");
    let json = serde_json::to_string(sequence.moves()).expect("moves serialize");
    let replayed: Vec<Move> = serde_json::from_str(&json).expect("moves deserialize");
    assert_eq!(replayed, sequence.moves());
}
