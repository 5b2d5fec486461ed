//! Persistence adapter for Hollowbrook.
//!
//! Captures the player's state into a serde [`PlayerSnapshot`] and stores it
//! as a JSON save file. Loading is forgiving: a missing file means "no saved
//! game" and malformed data is logged and treated the same way, so the
//! caller can always fall back to a fresh player.

/// Error types for the persistence adapter.
pub mod error;
/// The serializable player snapshot.
pub mod snapshot;
/// The JSON save-file store.
pub mod store;

/// Re-export error types.
pub use error::{SaveError, SaveResult};
/// Re-export the snapshot type.
pub use snapshot::PlayerSnapshot;
/// Re-export the save-file store.
pub use store::SaveFile;
