//! Domain-level error type used across the roster, session, and archive.
//!
//! This error type is UI- and storage-agnostic. Every failing operation
//! returns one of these kinds and leaves state untouched; the host layer is
//! expected to surface a message and carry on. None of them are fatal.

use thiserror::Error;

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Round,
    Other(String),
}

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Roster already holds the maximum number of players.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),
    /// Roster is at the minimum size and cannot shrink.
    #[error("below minimum: {0}")]
    BelowMinimum(String),
    /// Recorded tricks do not add up to the cards dealt this round.
    #[error("invalid trick total: got {actual}, expected {expected}")]
    InvalidTrickTotal { expected: u8, actual: u32 },
    /// Operation is not legal in the session's current phase.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// Missing resource in domain terms.
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// A persisted blob could not be decoded.
    #[error("corrupt state blob: {0}")]
    Corrupt(String),
}

impl DomainError {
    pub fn capacity_exceeded(detail: impl Into<String>) -> Self {
        Self::CapacityExceeded(detail.into())
    }
    pub fn below_minimum(detail: impl Into<String>) -> Self {
        Self::BelowMinimum(detail.into())
    }
    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn corrupt(detail: impl Into<String>) -> Self {
        Self::Corrupt(detail.into())
    }
}
