//! Share-text rendering for an external clipboard/share collaborator.

use crate::domain::roster::Player;

/// One "Name: score" line per player, in roster order. Pure; the caller
/// does any I/O.
pub fn summary_text(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| format!("{}: {}", p.name, p.score))
        .collect::<Vec<_>>()
        .join("\n")
}
