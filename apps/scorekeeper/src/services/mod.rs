//! Service layer: the session orchestrator and the game archive.

pub mod archive;
pub mod scoreboard;
