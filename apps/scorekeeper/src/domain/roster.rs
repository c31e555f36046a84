//! Ordered player roster.
//!
//! Position 0 bids first and the last position deals; `rotate` shifts both
//! roles by one seat each round so they cycle through every player over a
//! set.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, NotFoundKind};

/// One participant in the active game. `score` accumulates for the whole
/// session; `bid` and `tricks` are reset every round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: i32,
    pub bid: u8,
    pub tricks: u8,
}

impl Player {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            bid: 0,
            tricks: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Fresh roster of `count` players named "Player 1".."Player n".
    pub fn with_default_players(count: usize) -> Self {
        let players = (1..=count).map(|n| Player::named(format!("Player {n}"))).collect();
        Self { players }
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Add a player, defaulting the name to "Player {n}" for the 1-based
    /// next seat.
    pub fn add(&mut self, name: Option<&str>) -> Result<&Player, DomainError> {
        if self.players.len() >= MAX_PLAYERS {
            return Err(DomainError::capacity_exceeded(format!(
                "maximum of {MAX_PLAYERS} players reached"
            )));
        }
        let name = match name {
            Some(n) => n.to_string(),
            None => format!("Player {}", self.players.len() + 1),
        };
        self.players.push(Player::named(name));
        Ok(self.players.last().expect("just pushed"))
    }

    pub fn remove(&mut self, index: usize) -> Result<Player, DomainError> {
        if self.players.len() <= MIN_PLAYERS {
            return Err(DomainError::below_minimum(format!(
                "minimum of {MIN_PLAYERS} players required"
            )));
        }
        self.require_index(index)?;
        Ok(self.players.remove(index))
    }

    pub fn rename(&mut self, index: usize, name: &str) -> Result<(), DomainError> {
        self.require_index(index)?;
        self.players[index].name = name.to_string();
        Ok(())
    }

    /// Set a player's bid. Negative input clamps to zero.
    pub fn set_bid(&mut self, index: usize, value: i32) -> Result<(), DomainError> {
        self.require_index(index)?;
        self.players[index].bid = clamp_count(value);
        Ok(())
    }

    /// Set a player's recorded tricks. Negative input clamps to zero.
    pub fn set_tricks(&mut self, index: usize, value: i32) -> Result<(), DomainError> {
        self.require_index(index)?;
        self.players[index].tricks = clamp_count(value);
        Ok(())
    }

    /// Move the first bidder to the dealer seat, shifting everyone else up
    /// one. Relative order is preserved.
    pub fn rotate(&mut self) {
        if self.players.len() > 1 {
            let first = self.players.remove(0);
            self.players.push(first);
        }
    }

    /// Zero every player's bid and tricks for a fresh round.
    pub fn reset_round_fields(&mut self) {
        for p in &mut self.players {
            p.bid = 0;
            p.tricks = 0;
        }
    }

    pub fn tricks_total(&self) -> u32 {
        self.players.iter().map(|p| p.tricks as u32).sum()
    }

    /// Highest current score; 0 on an empty roster.
    pub fn leading_score(&self) -> i32 {
        self.players.iter().map(|p| p.score).max().unwrap_or(0)
    }

    /// Lowest current score; 0 on an empty roster.
    pub fn losing_score(&self) -> i32 {
        self.players.iter().map(|p| p.score).min().unwrap_or(0)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    fn require_index(&self, index: usize) -> Result<(), DomainError> {
        if index < self.players.len() {
            Ok(())
        } else {
            Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("no player at index {index}"),
            ))
        }
    }
}

fn clamp_count(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}
