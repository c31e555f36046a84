//! Collection of finished games, independently prunable from any active
//! session.

use tracing::debug;
use uuid::Uuid;

use crate::domain::history::GameRecord;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Default)]
pub struct GameArchive {
    games: Vec<GameRecord>,
}

impl GameArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(games: Vec<GameRecord>) -> Self {
        Self { games }
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn archive(&mut self, record: GameRecord) {
        self.games.push(record);
    }

    /// Remove a game by id. Unknown ids are a no-op, not an error; the
    /// confirmation dialog lives in the UI layer.
    pub fn delete(&mut self, id: Uuid) {
        let before = self.games.len();
        self.games.retain(|g| g.id != id);
        if self.games.len() == before {
            debug!(%id, "Delete of unknown archived game ignored");
        }
    }

    /// Rename one player snapshot inside one recorded round. Nothing else
    /// in the record is touched.
    pub fn rename_in_round(
        &mut self,
        id: Uuid,
        round_index: usize,
        player_index: usize,
        name: &str,
    ) -> Result<(), DomainError> {
        let game = self.require_game(id)?;
        let round = game.rounds.get_mut(round_index).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Round, format!("no round at index {round_index}"))
        })?;
        let snapshot = round.players.get_mut(player_index).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("no player at index {player_index}"),
            )
        })?;
        snapshot.name = name.to_string();
        Ok(())
    }

    /// Propagate a rename across one whole archived game: final scores,
    /// every round snapshot, and the points table.
    ///
    /// Matching is by name, not seat index: rotation reorders seats between
    /// rounds, so the same index names different people in different rounds.
    pub fn rename_across_game(
        &mut self,
        id: Uuid,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), DomainError> {
        let game = self.require_game(id)?;
        for p in game.players.iter_mut().filter(|p| p.name == old_name) {
            p.name = new_name.to_string();
        }
        for round in &mut game.rounds {
            for p in round.players.iter_mut().filter(|p| p.name == old_name) {
                p.name = new_name.to_string();
            }
        }
        for entry in &mut game.points_table {
            for cell in entry.players.iter_mut().filter(|c| c.name == old_name) {
                cell.name = new_name.to_string();
            }
        }
        Ok(())
    }

    fn require_game(&mut self, id: Uuid) -> Result<&mut GameRecord, DomainError> {
        self.games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("no game {id}")))
    }
}
