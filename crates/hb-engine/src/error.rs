//! Error types for the engine.

use hb_core::{ItemId, LocationId};

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur when constructing a game session.
///
/// Running actions never fail; construction is the engine's only fallible
/// surface, reached when restored player state does not fit the world.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The player's current location does not exist in the world.
    #[error("player location {0} does not exist in this world")]
    UnknownPlayerLocation(LocationId),

    /// The player's equipped weapon does not exist or is not a weapon.
    #[error("equipped item {0} is not a weapon in this world")]
    InvalidEquippedWeapon(ItemId),
}
