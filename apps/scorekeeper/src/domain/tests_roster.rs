use crate::domain::roster::Roster;
use crate::errors::domain::DomainError;

fn names(roster: &Roster) -> Vec<&str> {
    roster.players().iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn rotate_moves_first_player_to_the_end() {
    let mut roster = Roster::with_default_players(3);
    roster.rename(0, "A").unwrap();
    roster.rename(1, "B").unwrap();
    roster.rename(2, "C").unwrap();

    roster.rotate();
    assert_eq!(names(&roster), vec!["B", "C", "A"]);
}

#[test]
fn n_rotations_restore_original_order() {
    for n in 2..=7usize {
        let mut roster = Roster::with_default_players(n);
        let original = names(&roster)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        for _ in 0..n {
            roster.rotate();
        }
        assert_eq!(names(&roster), original);
    }
}

#[test]
fn add_defaults_name_to_next_seat() {
    let mut roster = Roster::with_default_players(2);
    let added = roster.add(None).unwrap();
    assert_eq!(added.name, "Player 3");

    let named = roster.add(Some("Dana")).unwrap();
    assert_eq!(named.name, "Dana");
}

#[test]
fn add_fails_at_capacity() {
    let mut roster = Roster::with_default_players(7);
    let err = roster.add(None).unwrap_err();
    assert!(matches!(err, DomainError::CapacityExceeded(_)));
    assert_eq!(roster.len(), 7);
}

#[test]
fn remove_fails_at_minimum() {
    let mut roster = Roster::with_default_players(2);
    let err = roster.remove(0).unwrap_err();
    assert!(matches!(err, DomainError::BelowMinimum(_)));
    assert_eq!(roster.len(), 2);
}

#[test]
fn remove_out_of_range_is_not_found() {
    let mut roster = Roster::with_default_players(3);
    let err = roster.remove(5).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_, _)));
    assert_eq!(roster.len(), 3);
}

#[test]
fn negative_bid_and_tricks_clamp_to_zero() {
    let mut roster = Roster::with_default_players(2);
    roster.set_bid(0, -4).unwrap();
    roster.set_tricks(0, -1).unwrap();
    assert_eq!(roster.get(0).unwrap().bid, 0);
    assert_eq!(roster.get(0).unwrap().tricks, 0);

    roster.set_bid(0, 3).unwrap();
    assert_eq!(roster.get(0).unwrap().bid, 3);
}

#[test]
fn display_scores_default_to_zero_on_empty_roster() {
    let roster = Roster::default();
    assert_eq!(roster.leading_score(), 0);
    assert_eq!(roster.losing_score(), 0);
}

#[test]
fn leading_and_losing_scores() {
    let mut roster = Roster::with_default_players(3);
    for (i, score) in [12, -3, 25].iter().enumerate() {
        roster.iter_mut().nth(i).unwrap().score = *score;
    }
    assert_eq!(roster.leading_score(), 25);
    assert_eq!(roster.losing_score(), -3);
}

#[test]
fn reset_round_fields_keeps_scores() {
    let mut roster = Roster::with_default_players(2);
    roster.set_bid(0, 3).unwrap();
    roster.set_tricks(0, 3).unwrap();
    roster.iter_mut().next().unwrap().score = 13;

    roster.reset_round_fields();
    let p = roster.get(0).unwrap();
    assert_eq!((p.bid, p.tricks, p.score), (0, 0, 13));
}
