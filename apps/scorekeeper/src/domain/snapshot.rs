//! Full-session snapshot: the persistence model handed to the gateway.
//!
//! Field names follow the legacy blob layout so existing saves load
//! unchanged. `card_count` is never trusted on load; the codec recomputes it
//! from `round` and `card_count_direction` (see `infra::persistence`).

use serde::{Deserialize, Serialize};

use crate::domain::history::{GameRecord, HistoryEntry, PointsEntry};
use crate::domain::roster::Player;
use crate::domain::state::{Direction, Suit};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub players: Vec<Player>,
    /// Round within the set, 1..=8.
    pub round: u8,
    pub set: u32,
    pub card_count: u8,
    pub trump_suit: Suit,
    pub game_active: bool,
    pub game_history: Vec<HistoryEntry>,
    pub past_games: Vec<GameRecord>,
    pub is_dark_mode: bool,
    pub card_count_direction: Direction,
    pub points_table: Vec<PointsEntry>,
}
