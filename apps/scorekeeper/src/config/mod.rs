//! Game configuration: starting direction and default roster size.

pub mod game;

pub use game::GameConfig;
