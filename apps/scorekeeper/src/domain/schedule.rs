//! Round scheduler: the `(set, round, card_count, trump, direction)` state
//! machine that drives a game from round to round.

use crate::domain::rules::{start_card_count, trump_after_round, ROUNDS_PER_SET};
use crate::domain::state::{Direction, Suit};

/// Schedule state for the open round.
///
/// Invariants: `round` stays in 1..=8; within a set `card_count` moves by
/// exactly one per round and stays in [1, 8]; a set spans exactly eight
/// rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSchedule {
    /// 1-based set counter.
    pub set: u32,
    /// Round within the set, 1..=8.
    pub round: u8,
    /// Cards dealt per player this round.
    pub card_count: u8,
    /// Trump suit for this round.
    pub trump: Suit,
    /// Fixed for the game; re-offered when a new set begins.
    pub direction: Direction,
}

impl RoundSchedule {
    pub fn new(direction: Direction) -> Self {
        Self {
            set: 1,
            round: 1,
            card_count: start_card_count(direction),
            trump: Suit::Spades,
            direction,
        }
    }

    /// Move to the next round. Returns true when the advance rolled the
    /// schedule into a new set (the moment to re-offer the direction choice).
    pub fn advance(&mut self) -> bool {
        self.trump = trump_after_round(self.round);
        if self.round == ROUNDS_PER_SET {
            self.set += 1;
            self.round = 1;
            self.card_count = start_card_count(self.direction);
            true
        } else {
            self.round += 1;
            self.card_count = match self.direction {
                Direction::Descending => self.card_count - 1,
                Direction::Ascending => self.card_count + 1,
            };
            false
        }
    }

    /// Re-affirm or change direction at the start of a set. Only meaningful
    /// at round 1; resets the card count to the direction's starting value.
    pub fn restart_set(&mut self, direction: Direction) {
        self.direction = direction;
        self.card_count = start_card_count(direction);
    }
}
