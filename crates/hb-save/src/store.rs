//! The JSON save-file store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SaveResult;
use crate::snapshot::PlayerSnapshot;

/// A save file at a fixed path.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    /// Create a store for the given path. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved snapshot.
    ///
    /// `Ok(None)` when no save file exists. Malformed data is logged and
    /// also treated as "no saved game" so the caller can start fresh.
    pub fn load(&self) -> SaveResult<Option<PlayerSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed save file, starting fresh");
                Ok(None)
            }
        }
    }

    /// Write the snapshot, replacing any previous save.
    pub fn save(&self, snapshot: &PlayerSnapshot) -> SaveResult<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_core::content;
    use hb_engine::Player;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SaveFile {
        SaveFile::new(dir.path().join("save.json"))
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let world = content::hollowbrook().unwrap();
        let mut player = Player::new(world.home());
        player.gold = 12;
        player.inventory.add(content::ITEM_RUSTY_SWORD, 1);

        store.save(&PlayerSnapshot::capture(&player)).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.gold, 12);
        let restored = loaded.restore(&world).unwrap();
        assert!(restored.inventory.has(content::ITEM_RUSTY_SWORD));
    }

    #[test]
    fn malformed_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
