//! Scoring rules: exact-bid bonus, competition ranking.

use crate::domain::roster::Player;

/// Apply the scoring rule to one player's round.
///
/// An exact bid earns `10 + bid`; anything else earns nothing and leaves the
/// running score untouched. Returns `(new_score, round_score)`.
pub fn score(bid: u8, tricks: u8, prior: i32) -> (i32, i32) {
    if bid == tricks {
        let round_score = 10 + bid as i32;
        (prior + round_score, round_score)
    } else {
        (prior, 0)
    }
}

/// A player's final placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Competition rank: ties share a rank and later ranks skip, so
    /// 50/50/40 places as 1/1/3.
    pub rank: usize,
    pub name: String,
    pub score: i32,
}

/// Rank players by score, highest first. Input order breaks display ties.
pub fn rank_standings(players: &[Player]) -> Vec<Standing> {
    let mut by_score: Vec<&Player> = players.iter().collect();
    by_score.sort_by(|a, b| b.score.cmp(&a.score));

    let mut standings: Vec<Standing> = Vec::with_capacity(by_score.len());
    for (i, p) in by_score.iter().enumerate() {
        let rank = match standings.last() {
            Some(prev) if prev.score == p.score => prev.rank,
            _ => i + 1,
        };
        standings.push(Standing {
            rank,
            name: p.name.clone(),
            score: p.score,
        });
    }
    standings
}

/// Names of all players tied at the top score. Empty for an empty roster.
pub fn winners(players: &[Player]) -> Vec<String> {
    rank_standings(players)
        .into_iter()
        .take_while(|s| s.rank == 1)
        .map(|s| s.name)
        .collect()
}
