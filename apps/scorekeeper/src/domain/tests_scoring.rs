use crate::domain::roster::Player;
use crate::domain::scoring::{rank_standings, score, winners};

fn player(name: &str, total: i32) -> Player {
    let mut p = Player::named(name);
    p.score = total;
    p
}

#[test]
fn exact_bid_earns_ten_plus_bid() {
    assert_eq!(score(0, 0, 0), (10, 10));
    assert_eq!(score(3, 3, 20), (33, 13));
    assert_eq!(score(8, 8, 5), (23, 18));
}

#[test]
fn missed_bid_earns_nothing() {
    assert_eq!(score(2, 3, 40), (40, 0));
    assert_eq!(score(5, 0, 0), (0, 0));
    assert_eq!(score(0, 1, 17), (17, 0));
}

#[test]
fn ranking_skips_over_ties() {
    // 50/50/40 places as 1/1/3, not 1/1/2.
    let players = vec![player("A", 50), player("B", 40), player("C", 50)];
    let standings = rank_standings(&players);

    assert_eq!(standings.len(), 3);
    assert_eq!((standings[0].rank, standings[0].score), (1, 50));
    assert_eq!((standings[1].rank, standings[1].score), (1, 50));
    assert_eq!((standings[2].rank, standings[2].score), (3, 40));
}

#[test]
fn winners_are_all_players_at_max() {
    let players = vec![player("A", 50), player("B", 40), player("C", 50)];
    assert_eq!(winners(&players), vec!["A".to_string(), "C".to_string()]);
}

#[test]
fn winners_empty_for_empty_roster() {
    assert!(winners(&[]).is_empty());
    assert!(rank_standings(&[]).is_empty());
}

#[test]
fn ranking_with_all_distinct_scores() {
    let players = vec![player("A", 10), player("B", 30), player("C", 20)];
    let standings = rank_standings(&players);
    let ranked: Vec<(usize, &str)> = standings
        .iter()
        .map(|s| (s.rank, s.name.as_str()))
        .collect();
    assert_eq!(ranked, vec![(1, "B"), (2, "C"), (3, "A")]);
}
