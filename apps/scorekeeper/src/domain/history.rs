//! Immutable round history, the compact points ledger, and the archived
//! game record.
//!
//! History entries are full snapshots written once per completed round; the
//! points ledger records only the points earned, for the live table and for
//! archived games. Both are append-only and read back in insertion order.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::roster::Player;
use crate::domain::schedule::RoundSchedule;
use crate::domain::scoring;
use crate::domain::state::Suit;

/// A player's state as recorded in a history entry. Immutable once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: i32,
    pub bid: u8,
    pub tricks: u8,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            score: p.score,
            bid: p.bid,
            tricks: p.tricks,
        }
    }
}

/// Full snapshot of one completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub set: u32,
    pub round: u8,
    #[serde(rename = "cardCount")]
    pub card_count: u8,
    #[serde(rename = "trumpSuit")]
    pub trump: Suit,
    pub players: Vec<PlayerSnapshot>,
}

impl HistoryEntry {
    /// Snapshot the roster against the round that just finished. Taken
    /// after scoring, before the bid/trick reset.
    pub fn capture(schedule: &RoundSchedule, players: &[Player]) -> Self {
        Self {
            set: schedule.set,
            round: schedule.round,
            card_count: schedule.card_count,
            trump: schedule.trump,
            players: players.iter().map(PlayerSnapshot::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
}

impl GameHistory {
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

/// Points one player earned in one round (0 or 10 + bid).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsCell {
    pub name: String,
    #[serde(rename = "roundScore")]
    pub round_score: i32,
}

/// Compact per-round record for the points table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsEntry {
    pub id: u64,
    pub set: u32,
    pub round: u8,
    pub players: Vec<PointsCell>,
}

/// Append-only points table with a per-session id sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsLedger {
    entries: Vec<PointsEntry>,
}

impl Default for PointsLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl PointsLedger {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append a round's points under the next sequential id; never fails.
    pub fn append(&mut self, set: u32, round: u8, players: Vec<PointsCell>) {
        let id = self.entries.last().map_or(1, |e| e.id + 1);
        self.entries.push(PointsEntry {
            id,
            set,
            round,
            players,
        });
    }

    pub fn entries(&self) -> &[PointsEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn from_entries(entries: Vec<PointsEntry>) -> Self {
        Self { entries }
    }

    /// Derived "Total" row: each player's cumulative score.
    pub fn totals_row(players: &[Player]) -> Vec<PointsCell> {
        players
            .iter()
            .map(|p| PointsCell {
                name: p.name.clone(),
                round_score: p.score,
            })
            .collect()
    }

    /// Derived "Current round" row: the delta each player would earn if the
    /// open round were locked right now. Only meaningful while bidding.
    pub fn pending_row(players: &[Player]) -> Vec<PointsCell> {
        players
            .iter()
            .map(|p| {
                let (_, round_score) = scoring::score(p.bid, p.tricks, p.score);
                PointsCell {
                    name: p.name.clone(),
                    round_score,
                }
            })
            .collect()
    }
}

/// Final score line of an archived game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPlayer {
    pub name: String,
    pub score: i32,
}

/// A finished game, frozen into the archive. Immutable as a unit except for
/// deletion and the explicit rename operations on the archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub players: Vec<FinalPlayer>,
    pub rounds: Vec<HistoryEntry>,
    #[serde(rename = "pointsTable")]
    pub points_table: Vec<PointsEntry>,
}

impl GameRecord {
    pub fn freeze(players: &[Player], history: &GameHistory, ledger: &PointsLedger) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: OffsetDateTime::now_utc(),
            players: players
                .iter()
                .map(|p| FinalPlayer {
                    name: p.name.clone(),
                    score: p.score,
                })
                .collect(),
            rounds: history.entries().to_vec(),
            points_table: ledger.entries().to_vec(),
        }
    }
}
