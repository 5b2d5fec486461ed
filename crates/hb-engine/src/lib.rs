//! The Hollowbrook action engine.
//!
//! [`Game`] owns the world catalog, the player, and the current encounter,
//! and mutates them in response to player actions: movement, combat, quest
//! progress, drinking potions, and trading. Expected rule violations (no
//! path that way, not enough gold, nothing to attack) never fail — they
//! narrate a message into the [`GameLog`] and leave state unchanged.

/// Engine configuration.
pub mod config;
/// Encounter generation: stamping live monsters out of templates.
pub mod encounter;
/// Error types for the engine.
pub mod error;
/// The game session and all player actions.
pub mod game;
/// The narration log and view-refresh change kinds.
pub mod log;
/// The player's mutable state.
pub mod player;

/// Re-export configuration types.
pub use config::GameConfig;
/// Re-export encounter types.
pub use encounter::MonsterInstance;
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export the game session.
pub use game::Game;
/// Re-export log types.
pub use log::{Change, Changes, GameLog, Narration};
/// Re-export player types.
pub use player::{Player, QuestLogEntry};
