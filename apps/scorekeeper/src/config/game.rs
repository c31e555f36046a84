use std::env;

use tracing::debug;

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::Direction;

/// How a new game starts: card-count direction and the default roster size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_direction: Direction,
    /// Number of "Player n" seats created by a new game, clamped to the
    /// roster limits.
    pub default_player_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_direction: Direction::Descending,
            default_player_count: 5,
        }
    }
}

impl GameConfig {
    /// Build from environment, falling back to defaults for unset or
    /// unparseable values.
    ///
    /// - `SCOREKEEPER_DIRECTION`: "ascending" or "descending"
    /// - `SCOREKEEPER_PLAYERS`: default roster size, clamped to 2..=7
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let starting_direction = match env::var("SCOREKEEPER_DIRECTION").as_deref() {
            Ok("ascending") => Direction::Ascending,
            Ok("descending") => Direction::Descending,
            Ok(other) => {
                debug!(value = other, "Unrecognized SCOREKEEPER_DIRECTION, using default");
                defaults.starting_direction
            }
            Err(_) => defaults.starting_direction,
        };

        let default_player_count = env::var("SCOREKEEPER_PLAYERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.default_player_count)
            .clamp(MIN_PLAYERS, MAX_PLAYERS);

        Self {
            starting_direction,
            default_player_count,
        }
    }

    pub fn clamped_player_count(&self) -> usize {
        self.default_player_count.clamp(MIN_PLAYERS, MAX_PLAYERS)
    }
}
