use crate::domain::schedule::RoundSchedule;
use crate::domain::state::{Direction, Suit};

#[test]
fn descending_set_rolls_over_after_eight_advances() {
    let mut s = RoundSchedule::new(Direction::Descending);
    assert_eq!((s.set, s.round, s.card_count), (1, 1, 8));
    assert_eq!(s.trump, Suit::Spades);

    for _ in 0..8 {
        s.advance();
    }
    assert_eq!((s.set, s.round, s.card_count), (2, 1, 8));
}

#[test]
fn ascending_counts_climb_then_roll_over() {
    let mut s = RoundSchedule::new(Direction::Ascending);
    assert_eq!(s.card_count, 1);

    for _ in 0..7 {
        assert!(!s.advance());
    }
    assert_eq!((s.round, s.card_count), (8, 8));

    assert!(s.advance());
    assert_eq!((s.set, s.round, s.card_count), (2, 1, 1));
}

#[test]
fn card_count_steps_by_one_within_a_set() {
    let mut s = RoundSchedule::new(Direction::Descending);
    let mut counts = vec![s.card_count];
    for _ in 0..7 {
        s.advance();
        counts.push(s.card_count);
    }
    assert_eq!(counts, vec![8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn trump_rotation_follows_pre_advance_round_index() {
    let mut s = RoundSchedule::new(Direction::Descending);
    let mut trumps = vec![s.trump];
    for _ in 0..8 {
        s.advance();
        trumps.push(s.trump);
    }
    // Round 1 is spades; the trump for each following round is indexed by
    // the previous round number, so round 5 wraps back to spades and round
    // 1 of the next set is spades again.
    assert_eq!(
        trumps,
        vec![
            Suit::Spades,
            Suit::Hearts,
            Suit::Diamonds,
            Suit::Clubs,
            Suit::Spades,
            Suit::Hearts,
            Suit::Diamonds,
            Suit::Clubs,
            Suit::Spades,
        ]
    );
}

#[test]
fn restart_set_switches_direction_and_start_count() {
    let mut s = RoundSchedule::new(Direction::Descending);
    for _ in 0..8 {
        s.advance();
    }
    assert_eq!((s.set, s.round, s.card_count), (2, 1, 8));

    s.restart_set(Direction::Ascending);
    assert_eq!(s.direction, Direction::Ascending);
    assert_eq!((s.set, s.round, s.card_count), (2, 1, 1));
}
