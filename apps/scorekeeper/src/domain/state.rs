//! Core session-state types: Suit, Direction, Phase.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Trump suit for a round. Ordering follows the rotation table, not card
/// strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// Symbol used on the wire and in display ("♠" etc.).
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.symbol())
    }
}

/// Whether the dealt card count rises or falls across a set's eight rounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Overall session progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// No game has been started yet.
    NotStarted,
    /// Players enter bids and (later) trick counts for the open round.
    Bidding,
    /// The round's scores are committed; waiting for the next round.
    Locked,
    /// Game finished and archived.
    Ended,
}

impl Phase {
    /// True while a game is in progress (bidding or locked).
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Bidding | Phase::Locked)
    }
}
