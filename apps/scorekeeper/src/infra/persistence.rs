//! Persistence boundary: blob codec plus the storage gateway trait.
//!
//! The core never touches ambient storage. The session serializes itself to
//! an opaque JSON blob and hands it to an injected [`PersistenceGateway`];
//! the host decides where blobs actually live (browser storage, a file,
//! nothing at all).

use crate::domain::rules::normalized_card_count;
use crate::domain::snapshot::SessionSnapshot;
use crate::errors::domain::DomainError;

/// Encode a session snapshot as an opaque blob.
pub fn encode(snapshot: &SessionSnapshot) -> Result<String, DomainError> {
    serde_json::to_string(snapshot).map_err(|e| DomainError::corrupt(e.to_string()))
}

/// Decode a blob back into a snapshot.
///
/// Normalization: the stored `cardCount` is not trusted. It is recomputed
/// here, once, from `round` and `cardCountDirection`; nothing downstream
/// second-guesses it again.
pub fn decode(blob: &str) -> Result<SessionSnapshot, DomainError> {
    let mut snapshot: SessionSnapshot =
        serde_json::from_str(blob).map_err(|e| DomainError::corrupt(e.to_string()))?;
    snapshot.card_count = normalized_card_count(snapshot.round, snapshot.card_count_direction);
    Ok(snapshot)
}

/// Storage seam implemented by the host. `load` returning `Ok(None)` means
/// no saved state (fresh start).
pub trait PersistenceGateway {
    fn save(&mut self, blob: &str) -> Result<(), DomainError>;
    fn load(&mut self) -> Result<Option<String>, DomainError>;
    fn clear(&mut self) -> Result<(), DomainError>;
}

/// In-memory gateway, for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    blob: Option<String>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn save(&mut self, blob: &str) -> Result<(), DomainError> {
        self.blob = Some(blob.to_string());
        Ok(())
    }

    fn load(&mut self) -> Result<Option<String>, DomainError> {
        Ok(self.blob.clone())
    }

    fn clear(&mut self) -> Result<(), DomainError> {
        self.blob = None;
        Ok(())
    }
}
