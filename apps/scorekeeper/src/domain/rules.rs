use crate::domain::state::{Direction, Suit};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 7;
pub const ROUNDS_PER_SET: u8 = 8;

/// Trump rotation table. Indexed by the round number of the round that just
/// finished, modulo 4 (see `trump_after_round`).
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// Card count for round 1 of a set: 8 when counts fall, 1 when they rise.
pub fn start_card_count(direction: Direction) -> u8 {
    match direction {
        Direction::Descending => ROUNDS_PER_SET,
        Direction::Ascending => 1,
    }
}

/// Trump for the round that follows `round_before` (1-based, pre-advance).
///
/// The suit table is indexed with the not-yet incremented round number, so
/// the trump shown for round N is `SUITS[(N - 1) % 4]`. Legacy behavior,
/// kept for save compatibility; round 1 of every set is spades.
pub fn trump_after_round(round_before: u8) -> Suit {
    SUITS[(round_before % 4) as usize]
}

/// Card count implied by a round number and direction.
///
/// Used as the load-time normalization step: a persisted `cardCount` is not
/// trusted, it is recomputed from `round` here. The modulo keeps the result
/// in [1, 8] even for legacy blobs whose round counter ran past a set.
pub fn normalized_card_count(round: u8, direction: Direction) -> u8 {
    match direction {
        Direction::Descending => {
            let r = round % ROUNDS_PER_SET;
            let r = if r == 0 { ROUNDS_PER_SET } else { r };
            ROUNDS_PER_SET + 1 - r
        }
        Direction::Ascending => ((round.saturating_sub(1)) % ROUNDS_PER_SET) + 1,
    }
}
