#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{
    rank_standings, score, summary_text, winners, Direction, GameHistory, GameRecord,
    HistoryEntry, Phase, Player, PointsCell, PointsEntry, PointsLedger, Roster, RoundSchedule,
    SessionSnapshot, Standing, Suit,
};
pub use errors::{DomainError, NotFoundKind};
pub use infra::persistence::{decode, encode, MemoryGateway, PersistenceGateway};
pub use services::archive::GameArchive;
pub use services::scoreboard::{GameOutcome, ScoreboardService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
