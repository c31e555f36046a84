//! Domain layer: pure scoring, scheduling, and roster logic.

pub mod history;
pub mod roster;
pub mod rules;
pub mod schedule;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod state_serde;
pub mod summary;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_schedule;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_roster;
#[cfg(test)]
mod tests_schedule;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use history::{GameHistory, GameRecord, HistoryEntry, PointsCell, PointsEntry, PointsLedger};
pub use roster::{Player, Roster};
pub use schedule::RoundSchedule;
pub use scoring::{rank_standings, score, winners, Standing};
pub use snapshot::SessionSnapshot;
pub use state::{Direction, Phase, Suit};
pub use summary::summary_text;
