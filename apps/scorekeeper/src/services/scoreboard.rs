//! Session orchestration service: the command surface the UI layer calls.
//!
//! Owns the one active game (roster, schedule, history, points ledger) plus
//! the archive, and drives the round lifecycle: bid entry, lock-and-score,
//! advance, end. Every successful mutation is snapshotted through the
//! injected persistence gateway.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::domain::history::{GameHistory, GameRecord, HistoryEntry, PointsCell, PointsLedger};
use crate::domain::roster::Roster;
use crate::domain::schedule::RoundSchedule;
use crate::domain::scoring::{self, Standing};
use crate::domain::snapshot::SessionSnapshot;
use crate::domain::state::{Direction, Phase};
use crate::domain::summary;
use crate::errors::domain::DomainError;
use crate::infra::persistence::{self, PersistenceGateway};
use crate::services::archive::GameArchive;

/// Result of ending a game: who won and where the record went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub record_id: Uuid,
    /// Every player tied at the maximum score.
    pub winners: Vec<String>,
    /// Competition-ranked final standings.
    pub standings: Vec<Standing>,
}

pub struct ScoreboardService {
    config: GameConfig,
    phase: Phase,
    roster: Roster,
    schedule: RoundSchedule,
    history: GameHistory,
    ledger: PointsLedger,
    /// Set when a new set just began and the direction choice should be
    /// re-offered. Informational; the previous direction stands unless
    /// `choose_card_count_direction` is called.
    direction_pending: bool,
    is_dark_mode: bool,
    archive: GameArchive,
    gateway: Box<dyn PersistenceGateway>,
}

impl ScoreboardService {
    pub fn new(config: GameConfig, gateway: Box<dyn PersistenceGateway>) -> Self {
        Self {
            phase: Phase::NotStarted,
            roster: Roster::default(),
            schedule: RoundSchedule::new(config.starting_direction),
            history: GameHistory::default(),
            ledger: PointsLedger::new(),
            direction_pending: false,
            is_dark_mode: false,
            archive: GameArchive::new(),
            gateway,
            config,
        }
    }

    /// Construct from whatever the gateway has: restore a saved session, or
    /// start a fresh game when there is none.
    pub fn bootstrap(
        config: GameConfig,
        mut gateway: Box<dyn PersistenceGateway>,
    ) -> Result<Self, DomainError> {
        let saved = gateway.load()?;
        let mut service = Self::new(config, gateway);
        match saved {
            Some(blob) => {
                let snapshot = persistence::decode(&blob)?;
                service.restore(snapshot);
                info!(
                    set = service.schedule.set,
                    round = service.schedule.round,
                    "Restored saved session"
                );
            }
            None => service.start_new_game(),
        }
        Ok(service)
    }

    // --- lifecycle -------------------------------------------------------

    /// Begin a brand-new game. An in-progress game is discarded, not
    /// archived; call `end_game` first to keep it.
    pub fn start_new_game(&mut self) {
        if self.phase.is_active() {
            warn!(
                set = self.schedule.set,
                round = self.schedule.round,
                "Discarding in-progress game"
            );
        }
        self.roster = Roster::with_default_players(self.config.clamped_player_count());
        self.schedule = RoundSchedule::new(self.config.starting_direction);
        self.history.clear();
        self.ledger.clear();
        self.direction_pending = false;
        self.phase = Phase::Bidding;
        if let Err(e) = self.gateway.clear() {
            warn!(error = %e, "Failed to clear saved state");
        }
        info!(players = self.roster.len(), "Started new game");
        self.persist();
    }

    /// `calculateScore`: commit the open round. Requires the recorded
    /// tricks to add up to the cards dealt; on failure nothing changes.
    pub fn lock_and_score(&mut self) -> Result<(), DomainError> {
        match self.phase {
            Phase::Bidding => {}
            Phase::Locked => {
                return Err(DomainError::invalid_state(
                    "round already scored; advance to the next round first",
                ))
            }
            _ => return Err(DomainError::invalid_state("no active game")),
        }
        let total = self.roster.tricks_total();
        if total != self.schedule.card_count as u32 {
            return Err(DomainError::InvalidTrickTotal {
                expected: self.schedule.card_count,
                actual: total,
            });
        }

        self.commit_round_scores();
        self.phase = Phase::Locked;
        info!(
            set = self.schedule.set,
            round = self.schedule.round,
            "Round scored"
        );
        self.persist();
        Ok(())
    }

    /// Open the next round: reset bids and tricks, rotate the roster so
    /// first bidder and dealer shift one seat, advance the schedule.
    pub fn next_round(&mut self) -> Result<(), DomainError> {
        if self.phase != Phase::Locked {
            return Err(DomainError::invalid_state(
                "score the current round before advancing",
            ));
        }
        self.roster.reset_round_fields();
        self.roster.rotate();
        let new_set = self.schedule.advance();
        if new_set {
            self.direction_pending = true;
            info!(set = self.schedule.set, "New set started");
        }
        self.phase = Phase::Bidding;
        debug!(
            set = self.schedule.set,
            round = self.schedule.round,
            card_count = self.schedule.card_count,
            trump = %self.schedule.trump,
            "Advanced round"
        );
        self.persist();
        Ok(())
    }

    /// Finish the game: score an unlocked final round, rank players, freeze
    /// a record into the archive.
    pub fn end_game(&mut self) -> Result<GameOutcome, DomainError> {
        match self.phase {
            // A locked round is already committed; re-scoring it would
            // double-count.
            Phase::Locked => {}
            Phase::Bidding => self.commit_round_scores(),
            _ => return Err(DomainError::invalid_state("no active game")),
        }

        let standings = scoring::rank_standings(self.roster.players());
        let winners = scoring::winners(self.roster.players());
        let record = GameRecord::freeze(self.roster.players(), &self.history, &self.ledger);
        let record_id = record.id;
        info!(%record_id, winners = ?winners, "Game ended");
        self.archive.archive(record);
        self.phase = Phase::Ended;
        self.persist();
        Ok(GameOutcome {
            record_id,
            winners,
            standings,
        })
    }

    /// Re-offered direction choice: valid only while bidding in round 1 of a
    /// set (game start or right after a set rollover). Once the round is
    /// locked its card count has been played, so the schedule stays put.
    pub fn choose_card_count_direction(&mut self, direction: Direction) -> Result<(), DomainError> {
        self.require_bidding()?;
        if self.schedule.round != 1 {
            return Err(DomainError::invalid_state(
                "direction can only change at the start of a set",
            ));
        }
        self.schedule.restart_set(direction);
        self.direction_pending = false;
        info!(direction = ?direction, "Card count direction set");
        self.persist();
        Ok(())
    }

    // --- roster commands -------------------------------------------------

    pub fn add_player(&mut self, name: Option<&str>) -> Result<(), DomainError> {
        self.require_roster_window()?;
        self.roster.add(name)?;
        self.persist();
        Ok(())
    }

    pub fn remove_player(&mut self, index: usize) -> Result<(), DomainError> {
        self.require_roster_window()?;
        self.roster.remove(index)?;
        self.persist();
        Ok(())
    }

    pub fn rename_player(&mut self, index: usize, name: &str) -> Result<(), DomainError> {
        self.require_active()?;
        self.roster.rename(index, name)?;
        self.persist();
        Ok(())
    }

    pub fn set_bid(&mut self, index: usize, value: i32) -> Result<(), DomainError> {
        self.require_bidding()?;
        self.roster.set_bid(index, value)?;
        self.persist();
        Ok(())
    }

    pub fn set_tricks(&mut self, index: usize, value: i32) -> Result<(), DomainError> {
        self.require_bidding()?;
        self.roster.set_tricks(index, value)?;
        self.persist();
        Ok(())
    }

    // --- archive commands ------------------------------------------------

    pub fn delete_archived_game(&mut self, id: Uuid) {
        self.archive.delete(id);
        self.persist();
    }

    pub fn rename_archived_in_round(
        &mut self,
        id: Uuid,
        round_index: usize,
        player_index: usize,
        name: &str,
    ) -> Result<(), DomainError> {
        self.archive.rename_in_round(id, round_index, player_index, name)?;
        self.persist();
        Ok(())
    }

    pub fn rename_across_archived_game(
        &mut self,
        id: Uuid,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), DomainError> {
        self.archive.rename_across_game(id, old_name, new_name)?;
        self.persist();
        Ok(())
    }

    // --- display queries -------------------------------------------------

    pub fn leading_score(&self) -> i32 {
        self.roster.leading_score()
    }

    pub fn losing_score(&self) -> i32 {
        self.roster.losing_score()
    }

    /// Share text for an external clipboard collaborator.
    pub fn summary_text(&self) -> String {
        summary::summary_text(self.roster.players())
    }

    /// Derived "Total" row of the points table.
    pub fn points_totals_row(&self) -> Vec<PointsCell> {
        PointsLedger::totals_row(self.roster.players())
    }

    /// Derived "Current round" row: uncommitted deltas while bidding, zeros
    /// otherwise.
    pub fn current_round_points(&self) -> Vec<PointsCell> {
        if self.phase == Phase::Bidding {
            PointsLedger::pending_row(self.roster.players())
        } else {
            self.roster
                .players()
                .iter()
                .map(|p| PointsCell {
                    name: p.name.clone(),
                    round_score: 0,
                })
                .collect()
        }
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.is_dark_mode = on;
        self.persist();
    }

    // --- accessors -------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn schedule(&self) -> &RoundSchedule {
        &self.schedule
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn ledger(&self) -> &PointsLedger {
        &self.ledger
    }

    pub fn archive(&self) -> &GameArchive {
        &self.archive
    }

    pub fn direction_pending(&self) -> bool {
        self.direction_pending
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    // --- persistence -----------------------------------------------------

    /// Snapshot the full session state for the gateway.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            players: self.roster.players().to_vec(),
            round: self.schedule.round,
            set: self.schedule.set,
            card_count: self.schedule.card_count,
            trump_suit: self.schedule.trump,
            game_active: self.phase.is_active(),
            game_history: self.history.entries().to_vec(),
            past_games: self.archive.games().to_vec(),
            is_dark_mode: self.is_dark_mode,
            card_count_direction: self.schedule.direction,
            points_table: self.ledger.entries().to_vec(),
        }
    }

    /// Rebuild session state from a decoded snapshot. A saved active game
    /// resumes in the bidding phase; the blob carries no lock flag.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        self.roster = Roster::from_players(snapshot.players);
        self.schedule = RoundSchedule {
            set: snapshot.set,
            round: snapshot.round,
            card_count: snapshot.card_count,
            trump: snapshot.trump_suit,
            direction: snapshot.card_count_direction,
        };
        self.history = GameHistory::from_entries(snapshot.game_history);
        self.ledger = PointsLedger::from_entries(snapshot.points_table);
        self.archive = GameArchive::from_records(snapshot.past_games);
        self.is_dark_mode = snapshot.is_dark_mode;
        self.direction_pending = false;
        self.phase = if snapshot.game_active {
            Phase::Bidding
        } else {
            Phase::NotStarted
        };
    }

    // --- internals -------------------------------------------------------

    /// Score every player, then append the history entry (post-score,
    /// pre-reset snapshot) and the points ledger row.
    fn commit_round_scores(&mut self) {
        let mut cells = Vec::with_capacity(self.roster.len());
        for p in self.roster.iter_mut() {
            let (new_score, round_score) = scoring::score(p.bid, p.tricks, p.score);
            p.score = new_score;
            cells.push(PointsCell {
                name: p.name.clone(),
                round_score,
            });
        }
        let entry = HistoryEntry::capture(&self.schedule, self.roster.players());
        self.history.append(entry);
        self.ledger
            .append(self.schedule.set, self.schedule.round, cells);
    }

    fn persist(&mut self) {
        // Storage is fire-and-forget: the command has already applied, so a
        // failing gateway is logged and the session carries on.
        match persistence::encode(&self.snapshot()) {
            Ok(blob) => {
                if let Err(e) = self.gateway.save(&blob) {
                    warn!(error = %e, "Failed to persist session");
                }
            }
            Err(e) => warn!(error = %e, "Failed to encode session"),
        }
    }

    fn require_active(&self) -> Result<(), DomainError> {
        if self.phase.is_active() {
            Ok(())
        } else {
            Err(DomainError::invalid_state("no active game"))
        }
    }

    fn require_bidding(&self) -> Result<(), DomainError> {
        match self.phase {
            Phase::Bidding => Ok(()),
            Phase::Locked => Err(DomainError::invalid_state(
                "round is locked; advance before editing",
            )),
            _ => Err(DomainError::invalid_state("no active game")),
        }
    }

    /// Roster changes are allowed only in the first two rounds of a set;
    /// later changes would skew the bid/deal rotation for the set.
    fn require_roster_window(&self) -> Result<(), DomainError> {
        self.require_active()?;
        if self.schedule.round <= 2 {
            Ok(())
        } else {
            Err(DomainError::invalid_state(
                "players can only join or leave in the first two rounds of a set",
            ))
        }
    }
}
